//! Tournament error types.

use thiserror::Error;

use super::models::{MatchId, TournamentId};
use crate::player::PlayerId;
use crate::store::StoreError;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Tournament not found
    #[error("Tournament not found: {0}")]
    TournamentNotFound(TournamentId),

    /// Player not found (or not registered in the tournament)
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// Round not found
    #[error("Round not found: {0}")]
    RoundNotFound(u32),

    /// Match not found in the given round
    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    /// Operation not allowed in the tournament's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Missing or malformed input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backing store failure
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl TournamentError {
    /// Whether an ID failed to resolve
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TournamentError::TournamentNotFound(_)
                | TournamentError::PlayerNotFound(_)
                | TournamentError::RoundNotFound(_)
                | TournamentError::MatchNotFound(_)
        )
    }

    /// Get a client-safe error message that doesn't leak sensitive information
    ///
    /// Storage errors are sanitized so backend details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Storage(_) => "Internal server error".to_string(),
            TournamentError::TournamentNotFound(_) => "Tournament not found".to_string(),
            TournamentError::PlayerNotFound(_) => "Player not found".to_string(),
            TournamentError::RoundNotFound(_) => "Round not found".to_string(),
            TournamentError::MatchNotFound(_) => "Match not found".to_string(),
            TournamentError::InvalidState(reason) | TournamentError::Validation(reason) => {
                reason.clone()
            }
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_family() {
        assert!(TournamentError::TournamentNotFound(Uuid::new_v4()).is_not_found());
        assert!(TournamentError::RoundNotFound(4).is_not_found());
        assert!(TournamentError::MatchNotFound(Uuid::new_v4()).is_not_found());
        assert!(!TournamentError::InvalidState("x".to_string()).is_not_found());
    }

    #[test]
    fn test_client_message_hides_storage_details() {
        let err = TournamentError::Storage(StoreError::Backend("disk on fire".to_string()));
        assert_eq!(err.client_message(), "Internal server error");

        let err = TournamentError::InvalidState("need at least 2 players".to_string());
        assert_eq!(err.client_message(), "need at least 2 players");
    }
}
