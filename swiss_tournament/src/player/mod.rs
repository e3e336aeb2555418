//! Player directory: registration and name lookup.

pub mod manager;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use manager::PlayerManager;

/// Player ID type
pub type PlayerId = Uuid;

/// A registered player. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player ID
    pub id: PlayerId,
    /// Display name
    pub name: String,
}

impl Player {
    /// Create a player with a fresh ID
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}
