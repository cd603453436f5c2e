//! Antipole pair selection: finding two mutually distant points in a set
//! to serve as the two pivots of an internal tree node.
//!
//! Mirrors [`crate::median`]'s exact/tournament-approximate split, plus
//! the two fast paths the builder uses to avoid exhaustive search when it
//! already has a strong candidate: the split-gated selector (only cares
//! whether *a* far-enough pair exists) and the ancestor-hint selector
//! (reuses a distance already cached by [`crate::ancestors::AncestorMap`]
//! instead of recomputing it).

use crate::ancestors::AncestorMap;
use crate::distance::Distance;
use crate::metric_space::MetricSpace;
use crate::point::PointId;
use crate::point_list::PointList;
use crate::rng::TournamentRng;
use crate::tournament::TournamentParams;

/// Finds the pair of points in `set` that are farthest apart. `None` if
/// `set` has fewer than two points.
///
/// The search is seeded with `max_dist = -1.0` and accepts on a strict
/// `>` comparison, so on a set of mutually coincident points (`d == 0`
/// for every pair) it still returns the first pair examined rather than
/// `None`, preserved from the original source and relied upon by
/// callers that need *a* pair whenever one exists, even a degenerate one.
pub fn exact_antipoles<T, D: Distance<T>>(space: &MetricSpace<T, D>, set: &PointList) -> Option<(PointId, PointId)> {
    let entries: Vec<PointId> = set.iter().map(|e| e.point).collect();
    if entries.len() < 2 {
        return None;
    }

    let mut best: Option<(PointId, PointId)> = None;
    let mut max_dist = -1.0_f64;

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let d = space.dist(entries[i], entries[j]);
            if d > max_dist {
                max_dist = d;
                best = Some((entries[i], entries[j]));
            }
        }
    }

    best
}

/// Tournament-approximates the antipole pair of `set`: identical
/// reduction to [`crate::median::approx_1_median`], except each bracket
/// promotes *both* of its exact antipoles to the next round.
pub fn approx_antipoles<T, D: Distance<T>>(
    space: &MetricSpace<T, D>,
    set: &PointList,
    dimension_hint: usize,
    rng: &mut TournamentRng,
) -> Option<(PointId, PointId)> {
    if set.size() < 2 {
        return None;
    }

    let params = TournamentParams::for_set(dimension_hint, set.size());
    let mut contestants = set.copy();

    while contestants.size() > params.final_round_size {
        let mut winners = PointList::new();

        while contestants.size() >= 2 * params.tournament_size {
            let mut bracket = PointList::new();
            for _ in 0..params.tournament_size {
                let idx = rng.gen_index(contestants.size());
                PointList::move_by_index(idx, &mut contestants, &mut bracket);
            }
            let (a, b) = exact_antipoles(space, &bracket).expect("bracket has >= 2 contestants");
            PointList::move_by_value(a, &mut bracket, &mut winners);
            PointList::move_by_value(b, &mut bracket, &mut winners);
        }

        if contestants.size() >= 2 {
            let (a, b) = exact_antipoles(space, &contestants).expect("checked size above");
            PointList::move_by_value(a, &mut contestants, &mut winners);
            PointList::move_by_value(b, &mut contestants, &mut winners);
        } else {
            // an odd contestant left with nobody to pair against; it
            // simply carries over to the next round unchanged.
            while !contestants.is_empty() {
                PointList::move_by_index(0, &mut contestants, &mut winners);
            }
        }

        contestants = winners;
    }

    exact_antipoles(space, &contestants)
}

/// The split-gated selector the builder calls when it has no antipole
/// hint: returns the first pair in `set` whose distance exceeds
/// `2 * target_radius`, short-circuiting as soon as one is found, or
/// `None` if every pair is within `2 * target_radius` (the set should
/// become a leaf).
pub fn split_gated<T, D: Distance<T>>(
    space: &MetricSpace<T, D>,
    set: &PointList,
    target_radius: f64,
) -> Option<(PointId, PointId)> {
    let entries: Vec<PointId> = set.iter().map(|e| e.point).collect();
    let threshold = 2.0 * target_radius;

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            if space.dist(entries[i], entries[j]) > threshold {
                return Some((entries[i], entries[j]));
            }
        }
    }
    None
}

/// The ancestor-hint selector: given `set` and one of the internal node's
/// antipoles (`ancestor`), looks for a member of `set` whose *cached*
/// distance to `ancestor` already exceeds `2 * target_radius`, avoiding a
/// fresh distance computation. `None` if no cached distance qualifies;
/// the caller then falls back to [`split_gated`] on the recursive call.
pub fn ancestor_hint(
    set: &PointList,
    target_radius: f64,
    ancestor: PointId,
    ancestors: &AncestorMap,
) -> Option<(PointId, PointId)> {
    let threshold = 2.0 * target_radius;
    set.iter()
        .find(|entry| ancestors.distance_to(entry.point, ancestor).is_some_and(|d| d > threshold))
        .map(|entry| (ancestor, entry.point))
}
