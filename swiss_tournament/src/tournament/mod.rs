//! Tournament module for Swiss-system events.
//!
//! This module provides tournament management functionality including:
//! - Tournament creation and player registration
//! - Dropping players from future rounds
//! - Starting the event and pairing each new round
//! - Recording match results and keeping standings current
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use swiss_tournament::engine::RegistrationOrder;
//! use swiss_tournament::player::PlayerManager;
//! use swiss_tournament::store::{MemoryPlayerDirectory, MemoryTournamentStore};
//! use swiss_tournament::tournament::TournamentManager;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = Arc::new(MemoryPlayerDirectory::new());
//!     let players = PlayerManager::new(directory.clone());
//!     let tournaments = TournamentManager::new(
//!         Arc::new(MemoryTournamentStore::new()),
//!         directory,
//!         Box::new(RegistrationOrder),
//!     );
//!
//!     let tournament = tournaments.create_tournament("Thursday Open").await?;
//!     for name in ["Ana", "Bia", "Caio"] {
//!         let player = players.create_player(name).await?;
//!         tournaments.register_player(tournament.id, player.id).await?;
//!     }
//!
//!     let started = tournaments.start_tournament(tournament.id).await?;
//!     assert_eq!(started.rounds[0].matches.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{TournamentError, TournamentResult};
pub use manager::{MIN_PLAYERS, TournamentManager};
pub use models::{
    Match, MatchId, MatchStatus, Round, SetScore, Standing, Tournament, TournamentId,
    TournamentStatus,
};
