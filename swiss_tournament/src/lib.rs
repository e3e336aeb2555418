//! # Swiss Tournament
//!
//! A Swiss-system tournament engine: player registration, round-by-round
//! pairing, match results, and a ranked standings table.
//!
//! ## Architecture
//!
//! The engine is a set of pure functions over a [`Tournament`] value:
//!
//! - **Statistics**: wins, losses, sets and score per player
//! - **Ranking**: score, then Buchholz, then set win percentage
//! - **Pairing**: seed by score and pair greedily, avoiding rematches, with
//!   a bye for odd fields
//! - **Results**: record set scores and decide the winner
//!
//! The managers wrap the engine with storage: tournaments and players live
//! behind the [`store`] traits, so the same code runs over the in-memory
//! stores or any other backend.
//!
//! ## Core Modules
//!
//! - [`engine`]: Aggregation, ranking, pairing and result processing
//! - [`tournament`]: Data model, errors and the lifecycle manager
//! - [`player`]: Player directory access
//! - [`store`]: Storage traits and in-memory implementations

/// Pairing and standings engine.
pub mod engine;

/// Player records and registration.
pub mod player;

/// Storage traits and in-memory stores.
pub mod store;

/// Tournament data model and lifecycle.
pub mod tournament;

pub use engine::{RandomTieBreak, RegistrationOrder, SeedTieBreak};
pub use player::{Player, PlayerId, PlayerManager};
pub use tournament::{
    Match, Round, SetScore, Standing, Tournament, TournamentError, TournamentManager,
    TournamentResult, TournamentStatus,
};
