//! Shared tournament-bracket sizing for the 1-median and antipole-pair
//! reductions in [`crate::median`] and [`crate::antipole`]. Both
//! narrow a candidate pool down via brackets of `dimension_hint + 1`
//! random contestants until a final round small enough for an exact
//! pass, so they share the same sizing rule.

/// Bracket size and final-round cutoff for a tournament reduction over a
/// set of the given size.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TournamentParams {
    pub(crate) tournament_size: usize,
    pub(crate) final_round_size: usize,
}

impl TournamentParams {
    pub(crate) fn for_set(dimension_hint: usize, set_size: usize) -> Self {
        let tournament_size = (dimension_hint + 1).max(crate::constants::MIN_TOURNAMENT_SIZE);
        let final_round_size = ((tournament_size * tournament_size).saturating_sub(1)).max((set_size as f64).sqrt().round() as usize);
        Self {
            tournament_size,
            final_round_size,
        }
    }
}
