//! Exact and tournament-approximated selection of a set's 1-median: the
//! point minimizing the sum of distances to the rest of the set. This is
//! CLAM's notion of a cluster center taken literally rather than
//! approximated by an arithmetic mean, which is what "cluster centroid"
//! means throughout this crate.

use crate::distance::Distance;
use crate::metric_space::MetricSpace;
use crate::point::PointId;
use crate::point_list::PointList;
use crate::rng::TournamentRng;
use crate::tournament::TournamentParams;

/// Finds the exact 1-median of `set`: the point minimizing the sum of
/// distances to every other point in `set`. O(|set|^2) distance
/// evaluations. Panics if `set` is empty.
pub fn exact_1_median<T, D: Distance<T>>(space: &MetricSpace<T, D>, set: &PointList) -> PointId {
    assert!(!set.is_empty(), "exact_1_median requires a non-empty set");

    let entries: Vec<PointId> = set.iter().map(|e| e.point).collect();
    let mut sums = vec![0.0_f64; entries.len()];

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let d = space.dist(entries[i], entries[j]);
            sums[i] += d;
            sums[j] += d;
        }
    }

    let (best_idx, _) = sums
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |(best_i, best_sum), (i, &sum)| {
            if sum < best_sum {
                (i, sum)
            } else {
                (best_i, best_sum)
            }
        });
    entries[best_idx]
}

/// Approximates the 1-median of `set` via tournament reduction: on large
/// sets, repeatedly narrows the candidate pool down to brackets of
/// `dimension_hint + 1` random contestants, keeping only each bracket's
/// exact winner, until the pool is small enough for one final exact pass.
///
/// Falls back to [`exact_1_median`] directly when `set` is already at or
/// below the final-round size.
pub fn approx_1_median<T, D: Distance<T>>(
    space: &MetricSpace<T, D>,
    set: &PointList,
    dimension_hint: usize,
    rng: &mut TournamentRng,
) -> PointId {
    assert!(!set.is_empty(), "approx_1_median requires a non-empty set");

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
            let winner = exact_1_median(space, &bracket);
            PointList::move_by_value(winner, &mut bracket, &mut winners);
        }

        let winner = exact_1_median(space, &contestants);
        PointList::move_by_value(winner, &mut contestants, &mut winners);

        contestants = winners;
    }

    exact_1_median(space, &contestants)
}
