//! The `Cluster` is a leaf's payload: a centroid and the points grouped
//! around it, each with its precomputed distance to the centroid already
//! on hand for pruning.

use crate::point::PointId;
use crate::point_list::PointList;

/// A leaf's cluster of mutually nearby points.
#[derive(Debug, Clone)]
pub struct Cluster {
    centroid: PointId,
    radius: f64,
    members: PointList,
}

impl Cluster {
    /// Builds a cluster directly from its parts. Used by the cluster
    /// builder (`crate::build`); exposed so tests can construct fixtures
    /// without going through a full tree build.
    pub(crate) fn new(centroid: PointId, radius: f64, members: PointList) -> Self {
        Self { centroid, radius, members }
    }

    /// The cluster's centroid (an approximation of the geometric
    /// 1-median, not the arithmetic mean).
    pub fn centroid(&self) -> PointId {
        self.centroid
    }

    /// `max_{p in members} d(centroid, p)`; `0.0` if the cluster has no
    /// non-centroid members.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The cluster's non-centroid members, each paired with its
    /// precomputed distance to the centroid.
    pub fn members(&self) -> &PointList {
        &self.members
    }

    /// Total point count, including the centroid.
    pub fn cardinality(&self) -> usize {
        self.members.size() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_counts_centroid() {
        let mut members = PointList::new();
        members.add(2, 1.0);
        members.add(3, 2.0);
        let cluster = Cluster::new(1, 2.0, members);
        assert_eq!(cluster.cardinality(), 3);
        assert_eq!(cluster.radius(), 2.0);
    }
}
