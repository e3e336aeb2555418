//! Tournament API handlers.
//!
//! Tournaments are returned in full (players, dropped players, rounds and
//! cached standings) by every route that changes one.
//!
//! # Examples
//!
//! Report a result for a round 1 match:
//! ```bash
//! curl -X POST http://localhost:3000/api/tournaments/$T/rounds/1/matches/$M/result \
//!   -H "Content-Type: application/json" \
//!   -d '{"sets": [{"a": 11, "b": 7}, {"a": 8, "b": 11}, {"a": 11, "b": 9}]}'
//! ```

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use swiss_tournament::{
    Match, PlayerId, Round, SetScore, Standing, Tournament, TournamentError,
    tournament::{MatchId, TournamentId},
};

use super::{ApiResult, AppState, respond};

#[derive(Debug, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: Option<String>,
}

/// Body of the register and drop routes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRefRequest {
    pub player_id: Option<PlayerId>,
}

impl PlayerRefRequest {
    fn player_id(&self) -> Result<PlayerId, TournamentError> {
        self.player_id
            .ok_or_else(|| TournamentError::Validation("playerId required".to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportResultRequest {
    pub sets: Option<Vec<SetScore>>,
}

#[derive(Debug, Serialize)]
pub struct ReportResultResponse {
    pub tournament: Tournament,
    pub r#match: Match,
}

/// Create a tournament.
///
/// # Errors
///
/// - `400 Bad Request`: Name missing or blank
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(request): Json<CreateTournamentRequest>,
) -> ApiResult<Tournament> {
    let name = request.name.unwrap_or_default();
    respond(
        "create_tournament",
        state.tournaments.create_tournament(&name).await,
    )
}

/// List all tournaments in creation order.
pub async fn list_tournaments(State(state): State<AppState>) -> ApiResult<Vec<Tournament>> {
    respond("list_tournaments", state.tournaments.list_tournaments().await)
}

/// Get one tournament.
///
/// # Errors
///
/// - `404 Not Found`: Tournament doesn't exist
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<TournamentId>,
) -> ApiResult<Tournament> {
    respond("get_tournament", state.tournaments.get_tournament(id).await)
}

/// Register a player in a tournament. Allowed at any stage.
///
/// # Errors
///
/// - `400 Bad Request`: `playerId` missing
/// - `404 Not Found`: Tournament or player doesn't exist
pub async fn register_player(
    State(state): State<AppState>,
    Path(id): Path<TournamentId>,
    Json(request): Json<PlayerRefRequest>,
) -> ApiResult<Tournament> {
    let result = match request.player_id() {
        Ok(player_id) => state.tournaments.register_player(id, player_id).await,
        Err(e) => Err(e),
    };
    respond("register_player", result)
}

/// Drop a player from all future rounds.
///
/// # Errors
///
/// - `400 Bad Request`: `playerId` missing
/// - `404 Not Found`: Tournament doesn't exist or player isn't registered
pub async fn drop_player(
    State(state): State<AppState>,
    Path(id): Path<TournamentId>,
    Json(request): Json<PlayerRefRequest>,
) -> ApiResult<Tournament> {
    let result = match request.player_id() {
        Ok(player_id) => state.tournaments.drop_player(id, player_id).await,
        Err(e) => Err(e),
    };
    respond("drop_player", result)
}

/// Start a tournament and pair round 1.
///
/// # Errors
///
/// - `400 Bad Request`: Already started, or fewer than two players
/// - `404 Not Found`: Tournament doesn't exist
pub async fn start_tournament(
    State(state): State<AppState>,
    Path(id): Path<TournamentId>,
) -> ApiResult<Tournament> {
    respond("start_tournament", state.tournaments.start_tournament(id).await)
}

/// Record the sets of a match.
///
/// The winner is whoever took more sets; reporting again overwrites the
/// previous result.
///
/// # Errors
///
/// - `400 Bad Request`: `sets` missing
/// - `404 Not Found`: Tournament, round or match doesn't exist
pub async fn report_match_result(
    State(state): State<AppState>,
    Path((id, round_number, match_id)): Path<(TournamentId, u32, MatchId)>,
    Json(request): Json<ReportResultRequest>,
) -> ApiResult<ReportResultResponse> {
    let result = match request.sets {
        Some(sets) => state
            .tournaments
            .report_match_result(id, round_number, match_id, sets)
            .await
            .map(|(tournament, r#match)| ReportResultResponse {
                tournament,
                r#match,
            }),
        None => Err(TournamentError::Validation("sets required".to_string())),
    };
    respond("report_match_result", result)
}

/// Pair the next round.
///
/// # Errors
///
/// - `400 Bad Request`: Not started, or fewer than two active players
/// - `404 Not Found`: Tournament doesn't exist
pub async fn generate_next_round(
    State(state): State<AppState>,
    Path(id): Path<TournamentId>,
) -> ApiResult<Round> {
    respond(
        "generate_next_round",
        state.tournaments.generate_next_round(id).await,
    )
}

/// Current standings, computed from every reported result.
///
/// # Errors
///
/// - `404 Not Found`: Tournament doesn't exist
pub async fn get_standings(
    State(state): State<AppState>,
    Path(id): Path<TournamentId>,
) -> ApiResult<Vec<Standing>> {
    respond("get_standings", state.tournaments.get_standings(id).await)
}
