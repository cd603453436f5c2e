//! Couples a point arena to a distance oracle into a single handle that
//! the builder and search algorithms pass around.
//!
//! This plays the same role as CLAM's `Space` trait, which couples a
//! `Dataset` to a `Metric` (`clam/src/space.rs`): rather than threading
//! `(&[Point<T>], &dyn Distance<T>)` through every function signature, the
//! pair is bundled once.

use crate::distance::Distance;
use crate::point::{Point, PointId};

/// A metric space: a point arena plus the distance oracle over it.
///
/// `Clone`/`Copy` are implemented by hand rather than derived: a derived
/// impl would wrongly require `T: Clone` and `D: Clone`, even though
/// both fields are references and copying this struct never touches
/// `T` or `D` themselves.
#[derive(Debug)]
pub struct MetricSpace<'a, T, D> {
    points: &'a [Point<T>],
    distance: &'a D,
}

impl<'a, T, D> Clone for MetricSpace<'a, T, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, D> Copy for MetricSpace<'a, T, D> {}

impl<'a, T, D: Distance<T>> MetricSpace<'a, T, D> {
    /// Builds a metric space over `points` using `distance` as the
    /// oracle. Ids must be dense positions into `points` (`points[i].id()
    /// == i` for every `i`, as every `Point::new(i, ..)` call site in
    /// this crate produces), so that [`MetricSpace::get`] can index
    /// directly instead of scanning.
    pub fn new(points: &'a [Point<T>], distance: &'a D) -> Self {
        Self { points, distance }
    }

    /// All point ids in this space, in arena order.
    pub fn point_ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.points.iter().map(Point::id)
    }

    /// The number of points in this space.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this space has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn get(&self, id: PointId) -> &Point<T> {
        let point = self.points.get(id).unwrap_or_else(|| panic!("point id {id} not present in this metric space's arena"));
        debug_assert_eq!(point.id(), id, "point id {id} does not match its position in the arena");
        point
    }

    /// Computes `d(a, b)` via the distance oracle, with a debug assertion
    /// that the oracle behaved (non-negative, finite) as spec'd.
    pub fn dist(&self, a: PointId, b: PointId) -> f64 {
        let d = self.distance.distance(self.get(a).payload(), self.get(b).payload());
        crate::error::debug_assert_oracle_sane(self.distance.name(), d);
        d
    }

    /// Computes `d(id, query)` against an external payload not
    /// necessarily present in this space's arena: the role a search
    /// query plays, as opposed to [`MetricSpace::dist`]'s two in-arena
    /// points.
    pub fn dist_to_query(&self, id: PointId, query: &T) -> f64 {
        let d = self.distance.distance(self.get(id).payload(), query);
        crate::error::debug_assert_oracle_sane(self.distance.name(), d);
        d
    }
}
