//! Query algorithms over a built [`crate::tree::Tree`]: range search and
//! k-nearest-neighbor search, both driven by triangle-inequality pruning
//! against the antipole radii recorded at build time.

pub mod knn;
pub mod range;

/// A sentinel distance value used when a whole cluster is included as a
/// group without computing each member's exact distance to the query
/// (the "bulk include" case in [`range::range_search`]). Mirrors the
/// original structure's use of `-1` for the same purpose.
pub const UNKNOWN_DISTANCE: f64 = -1.0;
