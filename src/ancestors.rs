//! The per-build "ancestors" annotation: for every point, the `(antipole,
//! distance)` pairs accumulated for each internal node on the path from
//! the tree's root down to the leaf containing that point.
//!
//! The original C structure stores this as a mutable field directly on
//! `ap_Point`. Here it is build-time scratch kept out of the point's
//! identity entirely: a map owned by the [`crate::tree::Tree`], written
//! once during construction and consulted read-only afterward by the
//! ancestor-hint antipole selector.

use std::collections::HashMap;

use crate::point::PointId;

/// Maps a point id to the `(antipole, distance)` pairs recorded for it at
/// each internal node on its root-to-leaf path, in root-to-leaf order.
#[derive(Debug, Clone, Default)]
pub struct AncestorMap {
    entries: HashMap<PointId, Vec<(PointId, f64)>>,
}

impl AncestorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Records that `point`'s distance to `antipole` is `dist`, appending
    /// to whatever ancestor chain `point` has accumulated so far.
    pub fn record(&mut self, point: PointId, antipole: PointId, dist: f64) {
        self.entries.entry(point).or_default().push((antipole, dist));
    }

    /// Looks up the cached distance from `point` to `antipole`, if it was
    /// recorded as one of `point`'s ancestors.
    pub fn distance_to(&self, point: PointId, antipole: PointId) -> Option<f64> {
        self.entries
            .get(&point)?
            .iter()
            .find(|&&(a, _)| a == antipole)
            .map(|&(_, d)| d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_looks_up_by_antipole() {
        let mut map = AncestorMap::new();
        map.record(10, 1, 3.5);
        map.record(10, 2, 7.0);
        assert_eq!(map.distance_to(10, 1), Some(3.5));
        assert_eq!(map.distance_to(10, 2), Some(7.0));
        assert_eq!(map.distance_to(10, 99), None);
        assert_eq!(map.distance_to(999, 1), None);
    }
}
