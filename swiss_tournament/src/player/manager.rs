//! Player manager for creating and looking up players.

use log::info;
use std::sync::Arc;

use super::{Player, PlayerId};
use crate::store::PlayerDirectory;
use crate::tournament::errors::{TournamentError, TournamentResult};

/// Player manager
#[derive(Clone)]
pub struct PlayerManager {
    directory: Arc<dyn PlayerDirectory>,
}

impl PlayerManager {
    /// Create a new player manager over a directory
    pub fn new(directory: Arc<dyn PlayerDirectory>) -> Self {
        Self { directory }
    }

    /// Register a new player
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the name is blank.
    pub async fn create_player(&self, name: &str) -> TournamentResult<Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::Validation("name required".to_string()));
        }

        let player = self.directory.create(Player::new(name.to_string())).await?;
        info!("Created player {} ({})", player.name, player.id);
        Ok(player)
    }

    /// Get a player by ID
    pub async fn get_player(&self, id: PlayerId) -> TournamentResult<Player> {
        self.directory
            .get(id)
            .await?
            .ok_or(TournamentError::PlayerNotFound(id))
    }

    /// List all players in creation order
    pub async fn list_players(&self) -> TournamentResult<Vec<Player>> {
        Ok(self.directory.list().await?)
    }
}
