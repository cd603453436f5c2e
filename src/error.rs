//! Misuse and oracle-misbehavior checks, kept as small helpers rather
//! than a `Result`-returning error type.
//!
//! Programmer misuse is signaled with `assert!`/`panic!`, and
//! distance-oracle misbehavior with `debug_assert!`, compiled out in
//! release builds, rather than introducing an error-handling
//! dependency.

/// Asserts a `build_tree` precondition: `target_radius` must be
/// non-negative.
pub fn assert_valid_target_radius(target_radius: f64) {
    assert!(target_radius >= 0.0, "target_radius must be non-negative, got {target_radius}");
}

/// Asserts a `build_tree` precondition: `dimension_hint` sizes the
/// tournament bracket and must be at least 1.
pub fn assert_valid_dimension_hint(dimension_hint: usize) {
    assert!(dimension_hint >= 1, "dimension_hint must be at least 1, got {dimension_hint}");
}

/// Debug-only check that a distance oracle behaved: finite and
/// non-negative. Compiled out in release builds, matching spec.md §7's
/// "implementations should expose a debug assertion" for oracle
/// misbehavior, which is otherwise undefined behavior for the core.
#[inline]
pub fn debug_assert_oracle_sane(name: &str, d: f64) {
    debug_assert!(d.is_finite() && d >= 0.0, "distance oracle {name} returned {d}, which is not finite and non-negative");
}
