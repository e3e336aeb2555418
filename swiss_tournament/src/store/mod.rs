//! Storage abstractions for tournaments and players.
//!
//! The managers only ever see these traits, so the engine can run against
//! the in-memory implementations in tests and against another backing
//! store in production without change.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::player::{Player, PlayerId};
use crate::tournament::{Tournament, TournamentId};

pub use memory::{MemoryPlayerDirectory, MemoryTournamentStore};

/// Errors raised by a backing store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed to serve the request
    #[error("Backend error: {0}")]
    Backend(String),

    /// A record with this ID already exists
    #[error("Duplicate record: {0}")]
    Duplicate(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for tournament record storage
#[async_trait]
pub trait TournamentStore: Send + Sync {
    /// Insert a new tournament
    async fn create(&self, tournament: Tournament) -> StoreResult<Tournament>;

    /// Find tournament by ID
    async fn get(&self, id: TournamentId) -> StoreResult<Option<Tournament>>;

    /// List all tournaments in creation order
    async fn list(&self) -> StoreResult<Vec<Tournament>>;

    /// Replace an existing tournament (or insert it)
    async fn put(&self, tournament: Tournament) -> StoreResult<()>;
}

/// Trait for player lookups
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Insert a new player
    async fn create(&self, player: Player) -> StoreResult<Player>;

    /// Find player by ID
    async fn get(&self, id: PlayerId) -> StoreResult<Option<Player>>;

    /// List all players in creation order
    async fn list(&self) -> StoreResult<Vec<Player>>;
}
