//! In-memory store implementations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{PlayerDirectory, StoreError, StoreResult, TournamentStore};
use crate::player::{Player, PlayerId};
use crate::tournament::{Tournament, TournamentId};

/// Records keyed by ID, remembering insertion order for listings
#[derive(Debug)]
struct Entries<T> {
    by_id: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T: Clone> Entries<T> {
    fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn insert_new(&mut self, id: Uuid, value: T) -> StoreResult<()> {
        if self.by_id.contains_key(&id) {
            return Err(StoreError::Duplicate(id.to_string()));
        }
        self.by_id.insert(id, value);
        self.order.push(id);
        Ok(())
    }

    fn upsert(&mut self, id: Uuid, value: T) {
        if self.by_id.insert(id, value).is_none() {
            self.order.push(id);
        }
    }

    fn get(&self, id: &Uuid) -> Option<T> {
        self.by_id.get(id).cloned()
    }

    fn list(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id).cloned())
            .collect()
    }
}

/// In-memory tournament store
#[derive(Clone)]
pub struct MemoryTournamentStore {
    tournaments: Arc<RwLock<Entries<Tournament>>>,
}

impl Default for MemoryTournamentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTournamentStore {
    pub fn new() -> Self {
        Self {
            tournaments: Arc::new(RwLock::new(Entries::new())),
        }
    }
}

#[async_trait]
impl TournamentStore for MemoryTournamentStore {
    async fn create(&self, tournament: Tournament) -> StoreResult<Tournament> {
        self.tournaments
            .write()
            .await
            .insert_new(tournament.id, tournament.clone())?;
        Ok(tournament)
    }

    async fn get(&self, id: TournamentId) -> StoreResult<Option<Tournament>> {
        Ok(self.tournaments.read().await.get(&id))
    }

    async fn list(&self) -> StoreResult<Vec<Tournament>> {
        Ok(self.tournaments.read().await.list())
    }

    async fn put(&self, tournament: Tournament) -> StoreResult<()> {
        self.tournaments
            .write()
            .await
            .upsert(tournament.id, tournament);
        Ok(())
    }
}

/// In-memory player directory
#[derive(Clone)]
pub struct MemoryPlayerDirectory {
    players: Arc<RwLock<Entries<Player>>>,
}

impl Default for MemoryPlayerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPlayerDirectory {
    pub fn new() -> Self {
        Self {
            players: Arc::new(RwLock::new(Entries::new())),
        }
    }
}

#[async_trait]
impl PlayerDirectory for MemoryPlayerDirectory {
    async fn create(&self, player: Player) -> StoreResult<Player> {
        self.players
            .write()
            .await
            .insert_new(player.id, player.clone())?;
        Ok(player)
    }

    async fn get(&self, id: PlayerId) -> StoreResult<Option<Player>> {
        Ok(self.players.read().await.get(&id))
    }

    async fn list(&self) -> StoreResult<Vec<Player>> {
        Ok(self.players.read().await.list())
    }
}
