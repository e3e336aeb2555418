//! Match result processing.

use std::cmp::Ordering;
use std::collections::HashMap;

use log::info;

use super::ranking::rank;
use crate::player::PlayerId;
use crate::tournament::errors::{TournamentError, TournamentResult};
use crate::tournament::models::{
    Match, MatchId, MatchStatus, SetScore, Tournament, count_set_wins,
};

/// Record the set scores of a match and refresh the standings.
///
/// Reporting overwrites any earlier result. When both sides took the same
/// number of sets the match finishes without a winner. Values are not
/// range-checked.
///
/// # Errors
///
/// Returns `RoundNotFound` or `MatchNotFound`, in which case the tournament
/// is left unchanged.
pub fn report_result(
    tournament: &mut Tournament,
    round_number: u32,
    match_id: MatchId,
    sets: Vec<SetScore>,
    names: &HashMap<PlayerId, String>,
) -> TournamentResult<Match> {
    let round = tournament
        .find_round_mut(round_number)
        .ok_or(TournamentError::RoundNotFound(round_number))?;
    let m = round
        .find_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;

    let (won_a, won_b) = count_set_wins(&sets);
    m.winner = match won_a.cmp(&won_b) {
        Ordering::Greater => Some(m.player_a),
        Ordering::Less => m.player_b,
        Ordering::Equal => None,
    };
    m.sets = sets;
    m.status = MatchStatus::Finished;
    let reported = m.clone();

    info!(
        "Round {} match {}: {}-{} in sets, winner {:?}",
        round_number, match_id, won_a, won_b, reported.winner
    );

    tournament.standings = rank(tournament, names);
    Ok(reported)
}
