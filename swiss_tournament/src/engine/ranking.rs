//! Standings table with Buchholz tie-break.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::stats::{StatsTable, aggregate};
use crate::player::PlayerId;
use crate::tournament::models::{Standing, Tournament};

/// Sum of the current scores of every opponent met.
///
/// Opponents are valued at their full-tournament score, not their score at
/// the time the game was played.
pub fn buchholz(stats: &StatsTable, player_id: &PlayerId) -> u32 {
    stats.get(player_id).map_or(0, |s| {
        s.opponents.iter().map(|opp| stats.score_of(opp)).sum()
    })
}

/// Score desc, then Buchholz desc, then set win percentage desc
fn compare(a: &Standing, b: &Standing) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.buchholz.cmp(&a.buchholz))
        .then_with(|| b.set_win_pct.total_cmp(&a.set_win_pct))
}

/// Compute a fresh standings table from the tournament's full history.
///
/// `names` maps player IDs to display names; unknown IDs fall back to the
/// ID itself. Equal keys keep registration order and still get distinct
/// consecutive ranks.
pub fn rank(tournament: &Tournament, names: &HashMap<PlayerId, String>) -> Vec<Standing> {
    let stats = aggregate(tournament);

    let mut standings: Vec<Standing> = stats
        .iter()
        .map(|s| Standing {
            player_id: s.player_id,
            name: names
                .get(&s.player_id)
                .cloned()
                .unwrap_or_else(|| s.player_id.to_string()),
            wins: s.wins,
            losses: s.losses,
            sets_won: s.sets_won,
            sets_lost: s.sets_lost,
            set_win_pct: s.set_win_pct(),
            score: s.score,
            buchholz: buchholz(&stats, &s.player_id),
            matches_played: s.matches_played,
            rank: 0,
        })
        .collect();

    // `sort_by` is stable
    standings.sort_by(compare);
    for (idx, standing) in standings.iter_mut().enumerate() {
        standing.rank = idx + 1;
    }

    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::models::{Match, MatchStatus, Round, SetScore};
    use uuid::Uuid;

    fn decided(round: u32, winner: PlayerId, loser: PlayerId, sets: Vec<SetScore>) -> Match {
        let mut m = Match::scheduled(round, winner, loser);
        m.sets = sets;
        m.winner = Some(winner);
        m.status = MatchStatus::Finished;
        m
    }

    fn names_for(ids: &[PlayerId]) -> HashMap<PlayerId, String> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| (*id, format!("P{}", i + 1)))
            .collect()
    }

    #[test]
    fn test_ties_keep_registration_order() {
        let ids: Vec<PlayerId> = (0..4).map(|_| Uuid::new_v4()).collect();
        let mut t = Tournament::new("Fresh".to_string());
        t.players = ids.clone();

        let standings = rank(&t, &names_for(&ids));
        let order: Vec<PlayerId> = standings.iter().map(|s| s.player_id).collect();
        assert_eq!(order, ids);
        assert_eq!(
            standings.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(standings[0].name, "P1");
    }

    #[test]
    fn test_buchholz_breaks_score_ties() {
        // Round 1: p1 beats p2, p3 beats p4. Round 2: p1 beats p3, p4 beats p2.
        let ids: Vec<PlayerId> = (0..4).map(|_| Uuid::new_v4()).collect();
        let (p1, p2, p3, p4) = (ids[0], ids[1], ids[2], ids[3]);
        let win = || vec![SetScore::new(11, 4), SetScore::new(11, 6)];

        let mut t = Tournament::new("Buchholz".to_string());
        t.players = ids.clone();
        t.rounds = vec![
            Round {
                round_number: 1,
                matches: vec![decided(1, p1, p2, win()), decided(1, p3, p4, win())],
            },
            Round {
                round_number: 2,
                matches: vec![decided(2, p1, p3, win()), decided(2, p4, p2, win())],
            },
        ];

        let standings = rank(&t, &names_for(&ids));
        // p1: 2 pts. p3, p4: 1 pt each. p2: 0 pts.
        // Buchholz p3 = score(p4) + score(p1) = 3; p4 = score(p3) + score(p2) = 1.
        assert_eq!(standings[0].player_id, p1);
        assert_eq!(standings[1].player_id, p3);
        assert_eq!(standings[1].buchholz, 3);
        assert_eq!(standings[2].player_id, p4);
        assert_eq!(standings[2].buchholz, 1);
        assert_eq!(standings[3].player_id, p2);
        assert_eq!(standings[0].buchholz, 1);
    }

    #[test]
    fn test_set_win_pct_breaks_remaining_ties() {
        let ids: Vec<PlayerId> = (0..4).map(|_| Uuid::new_v4()).collect();
        let (p1, p2, p3, p4) = (ids[0], ids[1], ids[2], ids[3]);

        let mut t = Tournament::new("Sets".to_string());
        t.players = ids.clone();
        t.rounds = vec![Round {
            round_number: 1,
            matches: vec![
                decided(
                    1,
                    p1,
                    p2,
                    vec![
                        SetScore::new(11, 9),
                        SetScore::new(9, 11),
                        SetScore::new(11, 9),
                    ],
                ),
                decided(1, p3, p4, vec![SetScore::new(11, 2), SetScore::new(11, 3)]),
            ],
        }];

        let standings = rank(&t, &names_for(&ids));
        // p1 and p3 tie on score and Buchholz; p3 has the cleaner sets.
        assert_eq!(standings[0].player_id, p3);
        assert_eq!(standings[1].player_id, p1);
        assert_eq!(standings[2].player_id, p2);
        assert_eq!(standings[3].player_id, p4);
    }

    #[test]
    fn test_unknown_names_fall_back_to_id() {
        let id = Uuid::new_v4();
        let mut t = Tournament::new("Anon".to_string());
        t.players = vec![id];

        let standings = rank(&t, &HashMap::new());
        assert_eq!(standings[0].name, id.to_string());
    }

    #[test]
    fn test_rank_is_idempotent() {
        let ids: Vec<PlayerId> = (0..3).map(|_| Uuid::new_v4()).collect();
        let mut t = Tournament::new("Again".to_string());
        t.players = ids.clone();
        t.rounds = vec![Round {
            round_number: 1,
            matches: vec![
                decided(1, ids[1], ids[0], vec![SetScore::new(11, 8)]),
                Match::bye(1, ids[2]),
            ],
        }];

        let names = names_for(&ids);
        assert_eq!(rank(&t, &names), rank(&t, &names));
    }
}
