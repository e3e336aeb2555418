//! Player directory API handlers.
//!
//! ```bash
//! curl -X POST http://localhost:3000/api/players \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Marta"}'
//! ```

use axum::{Json, extract::State};
use serde::Deserialize;
use swiss_tournament::Player;

use super::{ApiResult, AppState, respond};

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: Option<String>,
}

/// Create a player.
///
/// # Errors
///
/// - `400 Bad Request`: Name missing or blank
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> ApiResult<Player> {
    let name = request.name.unwrap_or_default();
    respond("create_player", state.players.create_player(&name).await)
}

/// List all players in creation order.
pub async fn list_players(State(state): State<AppState>) -> ApiResult<Vec<Player>> {
    respond("list_players", state.players.list_players().await)
}
