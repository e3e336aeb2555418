//! Tournament data models for Swiss-system events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::player::PlayerId;

/// Tournament ID type
pub type TournamentId = Uuid;

/// Match ID type
pub type MatchId = Uuid;

/// Tournament state
///
/// There is no terminal state: once started, a tournament keeps generating
/// rounds for as long as the organiser asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Accepting registrations, no rounds yet
    NotStarted,
    /// Round 1 has been generated
    InProgress,
}

/// Match state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Waiting for a result
    Scheduled,
    /// Result recorded (or bye)
    Finished,
}

/// Score of a single set (game) within a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    /// Points for player A
    pub a: i32,
    /// Points for player B
    pub b: i32,
}

impl SetScore {
    /// Create a set score from both sides' points
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }
}

/// Which side of a match took a set. `None` for a drawn set.
pub fn set_winner(set: &SetScore) -> Option<Side> {
    match set.a.cmp(&set.b) {
        std::cmp::Ordering::Greater => Some(Side::A),
        std::cmp::Ordering::Less => Some(Side::B),
        std::cmp::Ordering::Equal => None,
    }
}

/// Count the sets won by each side as `(a, b)`.
pub fn count_set_wins(sets: &[SetScore]) -> (u32, u32) {
    sets.iter()
        .fold((0, 0), |(won_a, won_b), set| match set_winner(set) {
            Some(Side::A) => (won_a + 1, won_b),
            Some(Side::B) => (won_a, won_b + 1),
            None => (won_a, won_b),
        })
}

/// Side of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Player A's seat
    A,
    /// Player B's seat
    B,
}

/// A single pairing within a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Match ID
    pub id: MatchId,
    /// Round this match belongs to (1-indexed)
    pub round_number: u32,
    /// First player (the bye recipient for byes)
    pub player_a: PlayerId,
    /// Second player, absent for byes
    pub player_b: Option<PlayerId>,
    /// Reported set scores
    pub sets: Vec<SetScore>,
    /// Winner, absent until reported or when set wins were level
    pub winner: Option<PlayerId>,
    /// Current state
    pub status: MatchStatus,
    /// Whether this is an automatic win for an unpaired player
    pub is_bye: bool,
}

impl Match {
    /// Create a scheduled match between two players
    pub fn scheduled(round_number: u32, player_a: PlayerId, player_b: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            round_number,
            player_a,
            player_b: Some(player_b),
            sets: Vec::new(),
            winner: None,
            status: MatchStatus::Scheduled,
            is_bye: false,
        }
    }

    /// Create a bye: already finished, won by the lone player
    pub fn bye(round_number: u32, player: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            round_number,
            player_a: player,
            player_b: None,
            sets: Vec::new(),
            winner: Some(player),
            status: MatchStatus::Finished,
            is_bye: true,
        }
    }

    /// Whether this match was played between `first` and `second`, in either seat
    pub fn involves_pair(&self, first: PlayerId, second: PlayerId) -> bool {
        match self.player_b {
            Some(player_b) => {
                (self.player_a == first && player_b == second)
                    || (self.player_a == second && player_b == first)
            }
            None => false,
        }
    }

    /// Whether the match is finished
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }
}

/// One round of pairings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Round number (1-indexed)
    pub round_number: u32,
    /// Matches in pairing order; the bye, if any, is last
    pub matches: Vec<Match>,
}

impl Round {
    /// The bye match of this round, if one was awarded
    pub fn bye(&self) -> Option<&Match> {
        self.matches.iter().find(|m| m.is_bye)
    }

    /// Look up a match by ID
    pub fn find_match_mut(&mut self, match_id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == match_id)
    }
}

/// One line of the standings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// Player this line belongs to
    pub player_id: PlayerId,
    /// Display name at the time standings were computed
    pub name: String,
    /// Matches won over the board
    pub wins: u32,
    /// Matches lost
    pub losses: u32,
    /// Sets won
    pub sets_won: u32,
    /// Sets lost
    pub sets_lost: u32,
    /// Sets won over sets played, 0 with no sets
    pub set_win_pct: f64,
    /// One point per win or bye
    pub score: u32,
    /// Sum of opponents' scores
    pub buchholz: u32,
    /// Finished non-bye matches with a winner
    pub matches_played: u32,
    /// 1-indexed position; equal keys still receive distinct ranks
    pub rank: usize,
}

/// Tournament record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    /// Tournament ID
    pub id: TournamentId,
    /// Tournament name
    pub name: String,
    /// Current state
    pub status: TournamentStatus,
    /// Registered players in registration order
    pub players: Vec<PlayerId>,
    /// Players excluded from future rounds
    pub dropped_players: BTreeSet<PlayerId>,
    /// Generated rounds, round 1 first
    pub rounds: Vec<Round>,
    /// Standings as of the last state change
    pub standings: Vec<Standing>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create an empty tournament awaiting registrations
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            status: TournamentStatus::NotStarted,
            players: Vec::new(),
            dropped_players: BTreeSet::new(),
            rounds: Vec::new(),
            standings: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Registered players that have not dropped, in registration order
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .copied()
            .filter(|id| !self.dropped_players.contains(id))
            .collect()
    }

    /// Number of the most recent round, 0 before the first round
    pub fn current_round_number(&self) -> u32 {
        self.rounds.last().map_or(0, |r| r.round_number)
    }

    /// Whether two players have already met in a non-bye match
    pub fn have_played(&self, first: PlayerId, second: PlayerId) -> bool {
        self.rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .any(|m| m.involves_pair(first, second))
    }

    /// Look up a round by number
    pub fn find_round_mut(&mut self, round_number: u32) -> Option<&mut Round> {
        self.rounds
            .iter_mut()
            .find(|r| r.round_number == round_number)
    }
}
