//! k-nearest-neighbor search: a best-first traversal over two heaps, an
//! unbounded min-heap of subtrees ordered by a lower bound on their
//! contents' distance to the query, and a bounded max-heap of the `k`
//! closest candidate points found so far.

use crate::cluster::Cluster;
use crate::distance::Distance;
use crate::heap::Heap;
use crate::metric_space::MetricSpace;
use crate::point::PointId;
use crate::tree::{Node, Tree};

impl<'a, T, D: Distance<T>> Tree<'a, T, D> {
    /// Returns at most `k` points nearest `query`, ascending by distance.
    /// `k == 0` returns an empty result without touching the tree.
    pub fn nearest_neighbor_search(&self, query: &T, k: usize) -> Vec<(PointId, f64)> {
        if k == 0 {
            return Vec::new();
        }

        let space = self.space();
        let mut tree_pq: Heap<&Node> = Heap::new(false, 0);
        let mut point_pq: Heap<PointId> = Heap::new(true, k);

        tree_pq.insert(self.root(), -1.0);

        while let Some(top_dist) = tree_pq.peek_dist() {
            if point_pq.is_full() {
                let farthest = point_pq.peek_dist().expect("full heap has a root");
                if top_dist >= farthest {
                    log::trace!("knn early termination: nearest remaining subtree ({top_dist}) no closer than current farthest candidate ({farthest})");
                    break;
                }
            }

            let (node, _) = tree_pq.pop().expect("peeked above");
            match node {
                Node::Leaf(None) => {}
                Node::Leaf(Some(cluster)) => search_cluster(space, cluster, query, k, &mut point_pq),
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
                    try_insert(&mut point_pq, k, *a, dist_a);
                    try_insert(&mut point_pq, k, *b, dist_b);

                    tree_pq.insert(&**left, dist_a - *radius_a);
                    tree_pq.insert(&**right, dist_b - *radius_b);
                }
            }
        }

        point_pq.to_list()
    }
}

/// Inserts `(item, dist)` into `point_pq` if there is room, or if it is
/// closer than the heap's current farthest member (which is then
/// evicted). Skips `item` if it is already present: an internal node's
/// antipole is also a member of the subtree beneath it (it sits at
/// distance 0 from itself, so it is partitioned into its own side), so
/// the same point can reach here twice during one search, once as an
/// antipole and once as a cluster centroid or member.
fn try_insert(point_pq: &mut Heap<PointId>, k: usize, item: PointId, dist: f64) {
    if point_pq.contains(&item) {
        return;
    }
    if point_pq.size() < k {
        point_pq.insert(item, dist);
    } else if let Some(farthest) = point_pq.peek_dist() {
        if dist < farthest {
            point_pq.pop();
            point_pq.insert(item, dist);
        }
    }
}

fn search_cluster<T, D: Distance<T>>(
    space: &MetricSpace<T, D>,
    cluster: &Cluster,
    query: &T,
    k: usize,
    point_pq: &mut Heap<PointId>,
) {
    let dist_centroid = space.dist_to_query(cluster.centroid(), query);
    try_insert(point_pq, k, cluster.centroid(), dist_centroid);

    if point_pq.is_full() {
        let farthest = point_pq.peek_dist().expect("full heap has a root");
        if dist_centroid > farthest + cluster.radius() {
            return;
        }
    }

    for entry in cluster.members().iter() {
        let d_cm = entry.dist;
        if point_pq.is_full() {
            let farthest = point_pq.peek_dist().expect("full heap has a root");
            if dist_centroid > farthest + d_cm {
                continue;
            }
        }
        let d = space.dist_to_query(entry.point, query);
        try_insert(point_pq, k, entry.point, d);
    }
}

/// A naive linear scan over every point in `space`, for validating
/// [`Tree::nearest_neighbor_search`] in tests.
pub fn linear_knn_search<T, D: Distance<T>>(space: &MetricSpace<T, D>, query: &T, k: usize) -> Vec<(PointId, f64)> {
    if k == 0 {
        return Vec::new();
    }
    let mut all: Vec<(PointId, f64)> = space.point_ids().map(|id| (id, space.dist_to_query(id, query))).collect();
    all.sort_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).expect("distances must be comparable"));
    all.truncate(k);
    all
}
