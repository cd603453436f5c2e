//! The `Coordinate` trait bound used by the built-in distance oracles.
//!
//! The core tree and search algorithms never look inside a point's
//! payload: they only ever call the user-supplied
//! [`crate::distance::Distance`] implementation. `Coordinate` exists
//! solely to let this crate ship ready-made Euclidean, squared-Euclidean,
//! and Manhattan oracles over small integer or floating-point vectors.

use num_traits::NumCast;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

/// A scalar type usable as a vector coordinate by the built-in distance
/// oracles (`Euclidean`, `SquaredEuclidean`, `Manhattan`).
pub trait Coordinate:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> + Sum + NumCast
{
    /// Casts this coordinate to `f64` for use in a distance computation.
    fn as_f64(self) -> f64 {
        NumCast::from(self).expect("coordinate must cast to f64")
    }
}

impl<T> Coordinate for T where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T> + Sum + NumCast
{
}
