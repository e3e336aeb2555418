//! HTTP API for the tournament server.
//!
//! JSON routes map one-to-one onto the library's managers. Every other path
//! is served from the static directory, falling back to its `index.html`.
//!
//! # Modules
//!
//! - [`players`]: Player directory (create, list)
//! - [`tournaments`]: Tournament lifecycle, results and standings
//! - [`request_id`]: `x-request-id` correlation and request logging
//! - [`middleware`]: HTTP request metrics
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /health
//! POST /api/players                               {name}
//! GET  /api/players
//! POST /api/tournaments                           {name}
//! GET  /api/tournaments
//! GET  /api/tournaments/{id}
//! POST /api/tournaments/{id}/register             {playerId}
//! POST /api/tournaments/{id}/drop                 {playerId}
//! POST /api/tournaments/{id}/start
//! POST /api/tournaments/{id}/rounds/{roundNumber}/matches/{matchId}/result   {sets}
//! POST /api/tournaments/{id}/next-round
//! GET  /api/tournaments/{id}/standings
//! ```
//!
//! Errors are returned as `{"error": "<message>"}` with status 404 for an
//! unknown ID, 400 for a rejected operation and 500 for storage failures.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use st_server::api::{AppState, create_router};
//! use std::sync::Arc;
//! use swiss_tournament::store::{MemoryPlayerDirectory, MemoryTournamentStore};
//! use swiss_tournament::{PlayerManager, RandomTieBreak, TournamentManager};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = Arc::new(MemoryPlayerDirectory::new());
//! let state = AppState {
//!     players: Arc::new(PlayerManager::new(directory.clone())),
//!     tournaments: Arc::new(TournamentManager::new(
//!         Arc::new(MemoryTournamentStore::new()),
//!         directory,
//!         Box::new(RandomTieBreak::new()),
//!     )),
//! };
//!
//! let app = create_router(state, "public");
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod middleware;
pub mod players;
pub mod request_id;
pub mod tournaments;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use swiss_tournament::{PlayerManager, TournamentError, TournamentManager, TournamentResult};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};

use crate::{logging, metrics};

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; both managers sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<PlayerManager>,
    pub tournaments: Arc<TournamentManager>,
}

/// Error body returned by every failing route
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler result: JSON on success, status plus error body otherwise
pub type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// HTTP status for an engine error
pub fn status_for(err: &TournamentError) -> StatusCode {
    match err {
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        TournamentError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// Turn an operation's result into a response, recording its outcome
pub(crate) fn respond<T>(operation: &'static str, result: TournamentResult<T>) -> ApiResult<T> {
    match result {
        Ok(value) => {
            metrics::tournament_operations_total(operation, "ok");
            Ok(Json(value))
        }
        Err(err) => {
            let status = status_for(&err);
            let outcome = match status {
                StatusCode::NOT_FOUND => "not_found",
                StatusCode::BAD_REQUEST => "invalid",
                _ => "error",
            };
            metrics::tournament_operations_total(operation, outcome);
            logging::log_operation_error(operation, status.as_u16(), &err.to_string());

            Err((
                status,
                Json(ErrorResponse {
                    error: err.client_message(),
                }),
            ))
        }
    }
}

/// Create the complete router with all endpoints and middleware.
///
/// # Arguments
///
/// - `state`: Application state with managers
/// - `static_dir`: Directory served for every non-API path
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let static_files =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_router())
        .route_layer(axum::middleware::from_fn(middleware::track_metrics))
        .fallback_service(static_files)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// JSON routes under `/api`
fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/players",
            get(players::list_players).post(players::create_player),
        )
        .route(
            "/tournaments",
            get(tournaments::list_tournaments).post(tournaments::create_tournament),
        )
        .route("/tournaments/{id}", get(tournaments::get_tournament))
        .route(
            "/tournaments/{id}/register",
            post(tournaments::register_player),
        )
        .route("/tournaments/{id}/drop", post(tournaments::drop_player))
        .route("/tournaments/{id}/start", post(tournaments::start_tournament))
        .route(
            "/tournaments/{id}/rounds/{round_number}/matches/{match_id}/result",
            post(tournaments::report_match_result),
        )
        .route(
            "/tournaments/{id}/next-round",
            post(tournaments::generate_next_round),
        )
        .route(
            "/tournaments/{id}/standings",
            get(tournaments::get_standings),
        )
}

/// Health check endpoint for monitoring and load balancers.
///
/// Returns `200 OK` when the tournament store answers, `503 Service
/// Unavailable` otherwise.
///
/// ```bash
/// curl http://localhost:3000/health
/// # {"status":"healthy","version":"1.0.0","tournaments":2,"timestamp":"2026-10-19T10:30:00Z"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let tournaments = state.tournaments.list_tournaments().await;
    let healthy = tournaments.is_ok();

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "tournaments": tournaments.map(|t| t.len()).ok(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status_code, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiss_tournament::store::StoreError;
    use uuid::Uuid;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&TournamentError::TournamentNotFound(Uuid::new_v4())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&TournamentError::RoundNotFound(3)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&TournamentError::InvalidState("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&TournamentError::Validation("x".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_storage_error_is_sanitized() {
        let result: TournamentResult<()> = Err(StoreError::Backend("disk full".to_string()).into());
        let (status, Json(body)) = respond("get_tournament", result).unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
    }
}
