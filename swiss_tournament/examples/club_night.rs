//! Club Night Example
//!
//! Runs a short Swiss tournament over the in-memory stores and prints each
//! round's pairings and the final standings.

use std::sync::Arc;
use swiss_tournament::store::{MemoryPlayerDirectory, MemoryTournamentStore};
use swiss_tournament::{
    PlayerId, PlayerManager, RandomTieBreak, SetScore, TournamentManager, TournamentResult,
};

#[tokio::main]
async fn main() -> TournamentResult<()> {
    println!("=== Swiss Tournament Example ===\n");

    let directory = Arc::new(MemoryPlayerDirectory::new());
    let players = PlayerManager::new(directory.clone());
    let tournaments = TournamentManager::new(
        Arc::new(MemoryTournamentStore::new()),
        directory,
        Box::new(RandomTieBreak::seeded(2024)),
    );

    let tournament = tournaments.create_tournament("Club Night").await?;
    let names = ["Ana", "Bruno", "Carla", "Davi", "Elisa"];
    let mut ids = Vec::new();
    for name in names {
        let player = players.create_player(name).await?;
        tournaments.register_player(tournament.id, player.id).await?;
        ids.push(player.id);
    }
    let name_of = |id: PlayerId| {
        ids.iter()
            .position(|p| *p == id)
            .map(|i| names[i])
            .unwrap_or("?")
    };

    let started = tournaments.start_tournament(tournament.id).await?;
    let mut round = started.rounds[0].clone();

    for _ in 0..3 {
        println!("Round {}", round.round_number);
        for m in &round.matches {
            match m.player_b {
                None => println!("  {} has a bye", name_of(m.player_a)),
                Some(b) => {
                    // Earlier-registered player wins in straight sets
                    let a_first = ids.iter().position(|p| *p == m.player_a)
                        < ids.iter().position(|p| *p == b);
                    let sets = if a_first {
                        vec![SetScore::new(11, 7), SetScore::new(11, 9)]
                    } else {
                        vec![SetScore::new(6, 11), SetScore::new(9, 11)]
                    };
                    let (_, reported) = tournaments
                        .report_match_result(tournament.id, round.round_number, m.id, sets)
                        .await?;
                    let winner = reported.winner.map(name_of).unwrap_or("nobody");
                    println!("  {} vs {}: {} wins", name_of(m.player_a), name_of(b), winner);
                }
            }
        }
        round = tournaments.generate_next_round(tournament.id).await?;
    }

    println!("\nStandings after 3 rounds:");
    for s in tournaments.get_standings(tournament.id).await? {
        println!(
            "  {}. {:<6} score {}  buchholz {}  sets {}-{}",
            s.rank, s.name, s.score, s.buchholz, s.sets_won, s.sets_lost
        );
    }
    Ok(())
}
