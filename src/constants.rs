//! Hard-coded constants for the antipole tree and its dependents.

/// For avoiding divide-by-zero and strict-inequality edge cases when
/// comparing distances that should, mathematically, be equal.
pub const EPSILON: f64 = 1e-8;

/// Lower bound on the bracket size used by the tournament reduction,
/// regardless of how small `dimension_hint` is.
pub const MIN_TOURNAMENT_SIZE: usize = 2;
