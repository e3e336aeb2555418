//! Tournament manager: the lifecycle of a Swiss tournament.
//!
//! Each operation loads a copy of the tournament from the store, applies the
//! engine to it, and writes it back only when the whole operation succeeded.
//! Write operations are serialized through one lock, which also guards the
//! seeding tie-break strategy.

use log::info;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::errors::{TournamentError, TournamentResult};
use super::models::{
    Match, MatchId, Round, SetScore, Standing, Tournament, TournamentId, TournamentStatus,
};
use crate::engine::{self, SeedTieBreak};
use crate::player::PlayerId;
use crate::store::{PlayerDirectory, TournamentStore};

/// Minimum registrations before a tournament can start
pub const MIN_PLAYERS: usize = 2;

/// Tournament manager
#[derive(Clone)]
pub struct TournamentManager {
    tournaments: Arc<dyn TournamentStore>,
    players: Arc<dyn PlayerDirectory>,
    writer: Arc<Mutex<Box<dyn SeedTieBreak>>>,
}

impl TournamentManager {
    /// Create a new tournament manager
    ///
    /// # Arguments
    ///
    /// * `tournaments` - Tournament record store
    /// * `players` - Player directory used for registration checks and names
    /// * `tie_break` - Seeding order among players on equal scores
    pub fn new(
        tournaments: Arc<dyn TournamentStore>,
        players: Arc<dyn PlayerDirectory>,
        tie_break: Box<dyn SeedTieBreak>,
    ) -> Self {
        Self {
            tournaments,
            players,
            writer: Arc::new(Mutex::new(tie_break)),
        }
    }

    async fn load(&self, id: TournamentId) -> TournamentResult<Tournament> {
        self.tournaments
            .get(id)
            .await?
            .ok_or(TournamentError::TournamentNotFound(id))
    }

    /// Display names for every registered player
    async fn player_names(
        &self,
        tournament: &Tournament,
    ) -> TournamentResult<HashMap<PlayerId, String>> {
        let mut names = HashMap::with_capacity(tournament.players.len());
        for &id in &tournament.players {
            if let Some(player) = self.players.get(id).await? {
                names.insert(id, player.name);
            }
        }
        Ok(names)
    }

    /// Create a new tournament
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the name is blank.
    pub async fn create_tournament(&self, name: &str) -> TournamentResult<Tournament> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::Validation("name required".to_string()));
        }

        let tournament = self
            .tournaments
            .create(Tournament::new(name.to_string()))
            .await?;
        info!("Created tournament {} ({})", tournament.name, tournament.id);
        Ok(tournament)
    }

    /// Get a tournament by ID
    pub async fn get_tournament(&self, id: TournamentId) -> TournamentResult<Tournament> {
        self.load(id).await
    }

    /// List all tournaments in creation order
    pub async fn list_tournaments(&self) -> TournamentResult<Vec<Tournament>> {
        Ok(self.tournaments.list().await?)
    }

    /// Register a player. Registering twice is a no-op.
    ///
    /// Allowed in any state; a player joining mid-event enters the next round
    /// on zero points.
    ///
    /// # Errors
    ///
    /// Returns `TournamentNotFound` or `PlayerNotFound`.
    pub async fn register_player(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> TournamentResult<Tournament> {
        let _guard = self.writer.lock().await;
        let mut tournament = self.load(tournament_id).await?;

        if self.players.get(player_id).await?.is_none() {
            return Err(TournamentError::PlayerNotFound(player_id));
        }

        if !tournament.players.contains(&player_id) {
            tournament.players.push(player_id);
            let names = self.player_names(&tournament).await?;
            tournament.standings = engine::rank(&tournament, &names);
            self.tournaments.put(tournament.clone()).await?;
            info!("Registered player {} in tournament {}", player_id, tournament_id);
        }

        Ok(tournament)
    }

    /// Exclude a player from future rounds. Past matches are kept.
    ///
    /// # Errors
    ///
    /// Returns `TournamentNotFound`, or `PlayerNotFound` if the player is not
    /// registered in this tournament.
    pub async fn drop_player(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> TournamentResult<Tournament> {
        let _guard = self.writer.lock().await;
        let mut tournament = self.load(tournament_id).await?;

        if !tournament.players.contains(&player_id) {
            return Err(TournamentError::PlayerNotFound(player_id));
        }

        if tournament.dropped_players.insert(player_id) {
            self.tournaments.put(tournament.clone()).await?;
            info!("Dropped player {} from tournament {}", player_id, tournament_id);
        }

        Ok(tournament)
    }

    /// Start the tournament and pair round 1
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if already started, with fewer than two
    /// registered players, or with fewer than two active players.
    pub async fn start_tournament(
        &self,
        tournament_id: TournamentId,
    ) -> TournamentResult<Tournament> {
        let mut tie_break = self.writer.lock().await;
        let mut tournament = self.load(tournament_id).await?;

        if tournament.status != TournamentStatus::NotStarted {
            return Err(TournamentError::InvalidState(
                "tournament already started".to_string(),
            ));
        }
        if tournament.players.len() < MIN_PLAYERS {
            return Err(TournamentError::InvalidState(format!(
                "need at least {MIN_PLAYERS} players"
            )));
        }

        let round = engine::generate_next_round(&tournament, 0, tie_break.as_mut())?;
        tournament.status = TournamentStatus::InProgress;
        tournament.rounds.push(round);
        let names = self.player_names(&tournament).await?;
        tournament.standings = engine::rank(&tournament, &names);
        self.tournaments.put(tournament.clone()).await?;

        info!(
            "Started tournament {} with {} players",
            tournament_id,
            tournament.players.len()
        );
        Ok(tournament)
    }

    /// Pair the next round, whatever the state of the current one
    ///
    /// # Errors
    ///
    /// Returns `TournamentNotFound`, or `InvalidState` if the tournament has
    /// not started or fewer than two players are active.
    pub async fn generate_next_round(&self, tournament_id: TournamentId) -> TournamentResult<Round> {
        let mut tie_break = self.writer.lock().await;
        let mut tournament = self.load(tournament_id).await?;

        if tournament.status == TournamentStatus::NotStarted {
            return Err(TournamentError::InvalidState(
                "tournament not started".to_string(),
            ));
        }

        let previous = tournament.current_round_number();
        let round = engine::generate_next_round(&tournament, previous, tie_break.as_mut())?;
        tournament.rounds.push(round.clone());
        let names = self.player_names(&tournament).await?;
        tournament.standings = engine::rank(&tournament, &names);
        self.tournaments.put(tournament).await?;

        info!(
            "Tournament {}: generated round {} with {} matches",
            tournament_id,
            round.round_number,
            round.matches.len()
        );
        Ok(round)
    }

    /// Record a match result and refresh the standings
    ///
    /// # Errors
    ///
    /// Returns `TournamentNotFound`, `RoundNotFound` or `MatchNotFound`;
    /// nothing is stored in that case.
    pub async fn report_match_result(
        &self,
        tournament_id: TournamentId,
        round_number: u32,
        match_id: MatchId,
        sets: Vec<SetScore>,
    ) -> TournamentResult<(Tournament, Match)> {
        let _guard = self.writer.lock().await;
        let mut tournament = self.load(tournament_id).await?;
        let names = self.player_names(&tournament).await?;

        let reported =
            engine::report_result(&mut tournament, round_number, match_id, sets, &names)?;
        self.tournaments.put(tournament.clone()).await?;

        Ok((tournament, reported))
    }

    /// Standings computed fresh from the full match history
    pub async fn get_standings(&self, tournament_id: TournamentId) -> TournamentResult<Vec<Standing>> {
        let tournament = self.load(tournament_id).await?;
        let names = self.player_names(&tournament).await?;
        Ok(engine::rank(&tournament, &names))
    }
}
