//! Range search: find every indexed point within a given radius of a
//! query, using the antipole radii cached at each internal node and the
//! member-to-centroid distances cached at each leaf to prune whole
//! subtrees or whole clusters without touching every point.

use crate::distance::Distance;
use crate::metric_space::MetricSpace;
use crate::point::PointId;
use crate::point_list::PointList;
use crate::search::UNKNOWN_DISTANCE;
use crate::tree::{Node, Tree};

impl<'a, T, D: Distance<T>> Tree<'a, T, D> {
    /// Returns every indexed point `p` with `d(p, query) <= radius`, each
    /// paired with its distance to `query` where it was computed exactly.
    /// Points proven in-range by a bulk-include prune carry
    /// [`UNKNOWN_DISTANCE`] instead, since ruling a whole cluster in
    /// never computes the individual distances.
    pub fn range_search(&self, query: &T, radius: f64) -> PointList {
        let mut out = PointList::new();
        descend(self.space(), self.root(), query, radius, &mut out);
        out
    }
}

fn descend<T, D: Distance<T>>(space: &MetricSpace<T, D>, node: &Node, query: &T, radius: f64, out: &mut PointList) {
    match node {
        Node::Leaf(None) => {}
        Node::Leaf(Some(cluster)) => search_cluster(space, cluster, query, radius, out),
        Node::Internal {
            a,
            b,
            radius_a,
            radius_b,
            left,
            right,
        } => {
            let dist_a = space.dist_to_query(*a, query);
            let dist_b = space.dist_to_query(*b, query);

            if dist_a <= radius {
                out.add(*a, dist_a);
            }
            if dist_b <= radius {
                out.add(*b, dist_b);
            }

            if dist_a <= radius + radius_a {
                descend(space, &**left, query, radius, out);
            }
            if dist_b <= radius + radius_b {
                descend(space, &**right, query, radius, out);
            }
        }
    }
}

fn search_cluster<T, D: Distance<T>>(
    space: &MetricSpace<T, D>,
    cluster: &crate::cluster::Cluster,
    query: &T,
    radius: f64,
    out: &mut PointList,
) {
    let dist_centroid = space.dist_to_query(cluster.centroid(), query);
    if dist_centroid <= radius {
        out.add(cluster.centroid(), dist_centroid);
    }

    // bulk exclude: every member is farther than `radius` from the centroid's
    // own distance to query minus the cluster radius could allow.
    if dist_centroid > radius + cluster.radius() {
        return;
    }

    // bulk include: every member is guaranteed within range regardless of
    // its individual distance to the centroid.
    if dist_centroid <= radius - cluster.radius() {
        for entry in cluster.members().iter() {
            out.add(entry.point, UNKNOWN_DISTANCE);
        }
        return;
    }

    for entry in cluster.members().iter() {
        let d_cm = entry.dist;
        if dist_centroid > radius + d_cm {
            continue;
        }
        if dist_centroid <= radius - d_cm {
            out.add(entry.point, UNKNOWN_DISTANCE);
            continue;
        }
        let d = space.dist_to_query(entry.point, query);
        if d <= radius {
            out.add(entry.point, d);
        }
    }
}

/// A naive linear scan over every point in `space`, for validating
/// [`Tree::range_search`] in tests.
pub fn linear_range_search<T, D: Distance<T>>(space: &MetricSpace<T, D>, query: &T, radius: f64) -> PointList {
    let mut out = PointList::new();
    for id in space.point_ids() {
        let d = space.dist_to_query(id, query);
        if d <= radius {
            out.add(id, d);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::build::BuildConfig;
    use crate::distance::Euclidean;
    use crate::point::Point;

    fn grid(n: i64) -> Vec<Point<Vec<i64>>> {
        (0..n).map(|i| Point::new(i as usize, vec![i, 0])).collect()
    }

    fn ids(list: &PointList) -> HashSet<PointId> {
        list.iter().map(|e| e.point).collect()
    }

    #[test]
    fn range_search_matches_linear_scan_on_a_grid() {
        let points = grid(40);
        let euclidean = Euclidean;
        let config = BuildConfig::new(1.5, 2).with_seed(3);
        let tree = Tree::build_tree(&points, &euclidean, config);

        let query = vec![17_i64, 0];
        let found = tree.range_search(&query, 4.0);

        let space = MetricSpace::new(&points, &euclidean);
        let expected = linear_range_search(&space, &query, 4.0);

        assert_eq!(ids(&found), ids(&expected));
    }

    #[test]
    fn range_search_with_zero_radius_finds_only_exact_matches() {
        let points = grid(10);
        let euclidean = Euclidean;
        let config = BuildConfig::new(1.0, 2).with_seed(9);
        let tree = Tree::build_tree(&points, &euclidean, config);

        let query = vec![4_i64, 0];
        let found = tree.range_search(&query, 0.0);
        assert_eq!(ids(&found), HashSet::from([4]));
    }

    #[test]
    fn range_search_on_empty_tree_is_empty() {
        let points: Vec<Point<Vec<i64>>> = Vec::new();
        let euclidean = Euclidean;
        let config = BuildConfig::new(1.0, 2);
        let tree = Tree::build_tree(&points, &euclidean, config);
        assert!(tree.range_search(&vec![0_i64, 0], 100.0).is_empty());
    }

    #[test]
    fn range_search_dedupes_points_reachable_as_both_antipole_and_member() {
        let points = grid(60);
        let euclidean = Euclidean;
        let config = BuildConfig::new(2.0, 2).with_seed(11);
        let tree = Tree::build_tree(&points, &euclidean, config);

        let query = vec![30_i64, 0];
        let found = tree.range_search(&query, 10.0);
        let count = found.size();
        let unique = ids(&found).len();
        assert_eq!(count, unique);
    }
}
