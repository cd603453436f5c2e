//! Provides the `Distance` trait and the built-in oracles over small
//! numeric vectors.
//!
//! The tree and its searches are metric-agnostic: they depend only on this
//! trait, never on the shape of `T`. A caller embedding points in an
//! unusual metric space (strings under edit distance, sets under Jaccard,
//! etc.) implements `Distance<T>` for their own payload type and the rest
//! of the crate works unmodified. This mirrors the role CLAM's `Metric<T,
//! U>` trait plays for its `Space`/`Dataset` pair (`clam/src/metric.rs`),
//! narrowed to a single non-negative `f64` as spec'd.

use crate::number::Coordinate;

/// A distance oracle: given two points' payloads, returns a non-negative,
/// symmetric value satisfying the triangle inequality.
///
/// Implementations are assumed total. Passing a payload pair that yields a
/// negative or non-finite distance is oracle misbehavior (see
/// [`crate::error`]); the core's behavior in that case is undefined.
pub trait Distance<T>: std::fmt::Debug {
    /// Returns the name of this distance, for diagnostics/logging.
    fn name(&self) -> &str;

    /// Computes `d(x, y)`.
    fn distance(&self, x: &T, y: &T) -> f64;
}

/// L2-norm (Euclidean distance) over equal-length numeric vectors.
#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

impl<C: Coordinate> Distance<Vec<C>> for Euclidean {
    fn name(&self) -> &str {
        "euclidean"
    }

    fn distance(&self, x: &Vec<C>, y: &Vec<C>) -> f64 {
        SquaredEuclidean.distance(x, y).sqrt()
    }
}

/// Squared L2-norm. Cheaper than [`Euclidean`] when only relative order
/// matters, but it does not itself satisfy the triangle inequality, so it
/// must not be used to build or query an antipole tree directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SquaredEuclidean;

impl<C: Coordinate> Distance<Vec<C>> for SquaredEuclidean {
    fn name(&self) -> &str {
        "euclidean-squared"
    }

    fn distance(&self, x: &Vec<C>, y: &Vec<C>) -> f64 {
        x.iter()
            .zip(y.iter())
            .map(|(&a, &b)| {
                let d = a.as_f64() - b.as_f64();
                d * d
            })
            .sum()
    }
}

/// L1-norm (Manhattan distance) over equal-length numeric vectors.
#[derive(Debug, Default, Clone, Copy)]
pub struct Manhattan;

impl<C: Coordinate> Distance<Vec<C>> for Manhattan {
    fn name(&self) -> &str {
        "manhattan"
    }

    fn distance(&self, x: &Vec<C>, y: &Vec<C>) -> f64 {
        x.iter().zip(y.iter()).map(|(&a, &b)| (a.as_f64() - b.as_f64()).abs()).sum()
    }
}
