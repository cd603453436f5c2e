//! The antipole tree itself: a binary tree whose internal nodes hold two
//! mutually distant pivot points ("antipoles") and whose leaves hold a
//! [`Cluster`] of mutually nearby points.

use crate::ancestors::AncestorMap;
use crate::build::{self, BuildConfig, BuildContext};
use crate::cluster::Cluster;
use crate::distance::Distance;
use crate::metric_space::MetricSpace;
use crate::point::{Point, PointId};
use crate::point_list::PointList;

/// A node of the tree. Owned recursively (no shared/borrowed subtrees);
/// the tree is built once per [`Tree::build_tree`] call and never
/// mutated or shared across builds.
#[derive(Debug, Clone)]
pub(crate) enum Node {
    /// `None` only for the tree built over an empty point set.
    Leaf(Option<Cluster>),
    Internal {
        a: PointId,
        b: PointId,
        radius_a: f64,
        radius_b: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// An antipole tree indexing a caller-owned arena of points under a
/// caller-supplied [`Distance`] oracle.
///
/// The tree borrows its point arena and distance oracle rather than
/// owning them, mirroring CLAM's `Cluster`/`Dataset` pairing: build once,
/// query many times, for as long as the backing arena lives.
pub struct Tree<'a, T, D> {
    space: MetricSpace<'a, T, D>,
    root: Node,
    ancestors: AncestorMap,
}

impl<'a, T, D: Distance<T>> Tree<'a, T, D> {
    /// Builds an antipole tree over `points` under `distance`, per
    /// `config`.
    ///
    /// Recursively partitions `points` by proximity to a pair of
    /// antipoles until every remaining subset is tight enough (no pair
    /// exceeding `2 * config.target_radius`) to become a leaf cluster.
    /// An empty `points` arena produces a tree with an empty leaf root,
    /// for which every search is trivially empty.
    pub fn build_tree(points: &'a [Point<T>], distance: &'a D, config: BuildConfig) -> Self {
        let space = MetricSpace::new(points, distance);
        log::info!("building antipole tree over {} points (target_radius={})", space.len(), config.target_radius);

        let mut ctx = BuildContext::new(space, config);
        let root = if space.is_empty() {
            Node::Leaf(None)
        } else {
            let mut set = PointList::with_capacity(space.len());
            for id in space.point_ids() {
                set.add(id, 0.0);
            }
            build::build_node(&mut ctx, set, None)
        };

        Self {
            space,
            root,
            ancestors: ctx.ancestors,
        }
    }

    pub(crate) fn space(&self) -> &MetricSpace<'a, T, D> {
        &self.space
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// The per-build ancestor annotations recorded while this tree was
    /// constructed, keyed by point id. Exposed for diagnostics; search
    /// does not need these at query time since a query point was never
    /// present during the build.
    pub(crate) fn ancestors(&self) -> &AncestorMap {
        &self.ancestors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Euclidean;

    fn grid_points(n: i64) -> Vec<Point<Vec<i64>>> {
        (0..n).map(|i| Point::new(i as usize, vec![i, 0])).collect()
    }

    #[test]
    fn build_tree_on_empty_set_is_an_empty_leaf() {
        let points: Vec<Point<Vec<i64>>> = Vec::new();
        let euclidean = Euclidean;
        let config = BuildConfig::new(1.0, 2);
        let tree = Tree::build_tree(&points, &euclidean, config);
        assert!(matches!(tree.root(), Node::Leaf(None)));
    }

    #[test]
    fn build_tree_on_singleton_is_a_leaf_with_that_point() {
        let points = vec![Point::new(0, vec![1_i64, 1])];
        let euclidean = Euclidean;
        let config = BuildConfig::new(1.0, 2);
        let tree = Tree::build_tree(&points, &euclidean, config);
        match tree.root() {
            Node::Leaf(Some(cluster)) => {
                assert_eq!(cluster.centroid(), 0);
                assert_eq!(cluster.cardinality(), 1);
            }
            other => panic!("expected a singleton leaf, got {other:?}"),
        }
    }

    #[test]
    fn build_tree_on_a_tight_set_is_a_single_leaf() {
        let points = grid_points(5);
        let euclidean = Euclidean;
        let config = BuildConfig::new(10.0, 2);
        let tree = Tree::build_tree(&points, &euclidean, config);
        assert!(matches!(tree.root(), Node::Leaf(Some(_))));
    }

    #[test]
    fn build_tree_splits_a_spread_out_set() {
        let points = grid_points(20);
        let euclidean = Euclidean;
        let config = BuildConfig::new(0.5, 2).with_seed(1);
        let tree = Tree::build_tree(&points, &euclidean, config);
        assert!(matches!(tree.root(), Node::Internal { .. }));
    }

    #[test]
    fn build_tree_records_ancestor_distances_on_a_split() {
        let points = grid_points(20);
        let euclidean = Euclidean;
        let config = BuildConfig::new(0.5, 2).with_seed(1);
        let tree = Tree::build_tree(&points, &euclidean, config);
        if let Node::Internal { a, b, .. } = tree.root() {
            assert!(tree.ancestors().distance_to(*a, *a).is_none());
            let some_member = points.iter().map(|p| p.id()).find(|id| id != a && id != b).unwrap();
            assert!(tree.ancestors().distance_to(some_member, *a).is_some());
        } else {
            panic!("expected a split at the root for this seed");
        }
    }
}

#[cfg(test)]
mod end_to_end_scenarios {
    use super::*;
    use crate::distance::Euclidean;
    use crate::point::Point;

    #[test]
    fn five_collinear_points_form_a_single_leaf_and_answer_both_search_kinds() {
        let points: Vec<Point<Vec<i64>>> = (0..5).map(|i| Point::new(i as usize, vec![i, 0])).collect();
        let euclidean = Euclidean;
        let config = BuildConfig::new(10.0, 2);
        let tree = Tree::build_tree(&points, &euclidean, config);
        assert!(matches!(tree.root(), Node::Leaf(Some(_))));

        let in_range = tree.range_search(&vec![2_i64, 0], 1.0);
        let mut found: Vec<i64> = in_range.iter().map(|e| points[e.point].payload()[0]).collect();
        found.sort_unstable();
        assert_eq!(found, vec![1, 2, 3]);

        let nearest = tree.nearest_neighbor_search(&vec![2_i64, 0], 2);
        assert_eq!(nearest.len(), 2);
        assert_eq!(nearest[0], (2, 0.0));
        assert!(nearest[1].0 == 1 || nearest[1].0 == 3);
        assert_eq!(nearest[1].1, 1.0);
    }

    #[test]
    fn two_geographic_clusters_split_at_the_root() {
        let coords = [[0, 0], [1, 0], [0, 1], [100, 100], [101, 100], [100, 101]];
        let points: Vec<Point<Vec<i64>>> = coords.iter().enumerate().map(|(i, c)| Point::new(i, c.to_vec())).collect();
        let euclidean = Euclidean;
        let config = BuildConfig::new(5.0, 2).with_seed(1);
        let tree = Tree::build_tree(&points, &euclidean, config);
        assert!(matches!(tree.root(), Node::Internal { .. }));

        let in_range = tree.range_search(&vec![0_i64, 0], 2.0);
        let mut found: Vec<usize> = in_range.iter().map(|e| e.point).collect();
        found.sort_unstable();
        assert_eq!(found, vec![0, 1, 2]);
    }

    #[test]
    fn ten_by_ten_grid_nearest_neighbors_of_the_center_are_its_four_grid_neighbors() {
        let mut points = Vec::new();
        let mut id = 0;
        for i in 0..10 {
            for j in 0..10 {
                points.push(Point::new(id, vec![i, j]));
                id += 1;
            }
        }
        let euclidean = Euclidean;
        let config = BuildConfig::new(2.0, 2).with_seed(3);
        let tree = Tree::build_tree(&points, &euclidean, config);

        let nearest = tree.nearest_neighbor_search(&vec![5_i64, 5], 4);
        assert_eq!(nearest.len(), 4);
        for (_, dist) in &nearest {
            assert_eq!(*dist, 1.0);
        }
        let coords: Vec<[i64; 2]> = nearest.iter().map(|(id, _)| [points[*id].payload()[0], points[*id].payload()[1]]).collect();
        for expected in [[4, 5], [6, 5], [5, 4], [5, 6]] {
            assert!(coords.contains(&expected), "expected {expected:?} among {coords:?}");
        }
    }

    #[test]
    fn eight_identical_points_form_a_single_leaf_and_a_zero_radius_query_finds_all_of_them() {
        let points: Vec<Point<Vec<i64>>> = (0..8).map(|i| Point::new(i, vec![7_i64, 7])).collect();
        let euclidean = Euclidean;
        let config = BuildConfig::new(1.0, 2);
        let tree = Tree::build_tree(&points, &euclidean, config);
        assert!(matches!(tree.root(), Node::Leaf(Some(_))));

        let in_range = tree.range_search(&vec![7_i64, 7], 0.0);
        assert_eq!(in_range.size(), 8);
    }

    #[test]
    fn two_disjoint_extreme_points_force_a_split_with_one_point_per_leaf() {
        let points = vec![Point::new(0, vec![0_i64, 0]), Point::new(1, vec![255_i64, 255])];
        let euclidean = Euclidean;
        let config = BuildConfig::new(1.0, 2);
        let tree = Tree::build_tree(&points, &euclidean, config);
        match tree.root() {
            Node::Internal { left, right, .. } => {
                assert!(matches!(&**left, Node::Leaf(Some(c)) if c.cardinality() == 1));
                assert!(matches!(&**right, Node::Leaf(Some(c)) if c.cardinality() == 1));
            }
            other => panic!("expected a split, got {other:?}"),
        }

        let nearest = tree.nearest_neighbor_search(&vec![0_i64, 0], 1);
        assert_eq!(nearest, vec![(0, 0.0)]);
    }
}
