//! Per-player statistics folded from a tournament's match history.

use std::collections::HashMap;

use crate::player::PlayerId;
use crate::tournament::models::{Tournament, count_set_wins};

/// Raw counters for one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    /// Player these counters belong to
    pub player_id: PlayerId,
    /// Matches won over the board
    pub wins: u32,
    /// Matches lost
    pub losses: u32,
    /// Sets won across all matches
    pub sets_won: u32,
    /// Sets lost across all matches
    pub sets_lost: u32,
    /// Finished non-bye matches with a winner
    pub matches_played: u32,
    /// One point per win, byes included
    pub score: u32,
    /// Opponents met, one entry per match
    pub opponents: Vec<PlayerId>,
}

impl PlayerStats {
    fn zeroed(player_id: PlayerId) -> Self {
        Self {
            player_id,
            wins: 0,
            losses: 0,
            sets_won: 0,
            sets_lost: 0,
            matches_played: 0,
            score: 0,
            opponents: Vec::new(),
        }
    }

    /// Share of sets won, 0 when no sets have been played
    pub fn set_win_pct(&self) -> f64 {
        let total = self.sets_won + self.sets_lost;
        if total == 0 {
            0.0
        } else {
            f64::from(self.sets_won) / f64::from(total)
        }
    }
}

/// Stats for every player, iterable in registration order
#[derive(Debug, Clone, Default)]
pub struct StatsTable {
    entries: Vec<PlayerStats>,
    index: HashMap<PlayerId, usize>,
}

impl StatsTable {
    fn slot(&mut self, player_id: PlayerId) -> usize {
        if let Some(&idx) = self.index.get(&player_id) {
            return idx;
        }
        self.entries.push(PlayerStats::zeroed(player_id));
        let idx = self.entries.len() - 1;
        self.index.insert(player_id, idx);
        idx
    }

    /// Stats for a player, if they appear in the tournament
    pub fn get(&self, player_id: &PlayerId) -> Option<&PlayerStats> {
        self.index.get(player_id).map(|&idx| &self.entries[idx])
    }

    /// Current score for a player (0 if unknown)
    pub fn score_of(&self, player_id: &PlayerId) -> u32 {
        self.get(player_id).map_or(0, |s| s.score)
    }

    /// Iterate in registration order
    pub fn iter(&self) -> impl Iterator<Item = &PlayerStats> {
        self.entries.iter()
    }

    /// Number of players tracked
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no players are tracked
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fold every finished, decided match into per-player counters.
///
/// Byes add a win and a point but no sets, no `matches_played` and no
/// opponent. Finished matches without a winner are skipped entirely.
pub fn aggregate(tournament: &Tournament) -> StatsTable {
    let mut table = StatsTable::default();
    for &player_id in &tournament.players {
        table.slot(player_id);
    }

    for m in tournament.rounds.iter().flat_map(|r| r.matches.iter()) {
        let Some(winner) = m.winner else { continue };
        if !m.is_finished() {
            continue;
        }

        let a = table.slot(m.player_a);
        let b = m.player_b.map(|player_b| table.slot(player_b));

        if let Some(b) = b.filter(|_| !m.is_bye) {
            let (won_a, won_b) = count_set_wins(&m.sets);
            let player_a = m.player_a;
            let player_b = table.entries[b].player_id;

            let stats_a = &mut table.entries[a];
            stats_a.sets_won += won_a;
            stats_a.sets_lost += won_b;
            stats_a.matches_played += 1;
            stats_a.opponents.push(player_b);

            let stats_b = &mut table.entries[b];
            stats_b.sets_won += won_b;
            stats_b.sets_lost += won_a;
            stats_b.matches_played += 1;
            stats_b.opponents.push(player_a);
        }

        if winner == m.player_a {
            table.entries[a].wins += 1;
            table.entries[a].score += 1;
            if let Some(b) = b {
                table.entries[b].losses += 1;
            }
        } else if let Some(b) = b.filter(|_| m.player_b == Some(winner)) {
            table.entries[b].wins += 1;
            table.entries[b].score += 1;
            table.entries[a].losses += 1;
        }
    }

    table
}
