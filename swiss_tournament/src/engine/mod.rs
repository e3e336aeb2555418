//! Pairing and standings engine.
//!
//! Every function here is a pure computation over a [`Tournament`] value
//! (plus a tie-break strategy for seeding). Loading and saving records is
//! left to the managers.
//!
//! - [`stats`]: fold match history into per-player counters
//! - [`ranking`]: order players into a standings table
//! - [`pairing`]: decide the next round's matches
//! - [`results`]: record a reported match and refresh standings
//! - [`tiebreak`]: seeding order among players on equal scores
//!
//! [`Tournament`]: crate::tournament::Tournament

pub mod pairing;
pub mod ranking;
pub mod results;
pub mod stats;
pub mod tiebreak;

pub use pairing::generate_next_round;
pub use ranking::rank;
pub use results::report_result;
pub use stats::{PlayerStats, StatsTable, aggregate};
pub use tiebreak::{RandomTieBreak, RegistrationOrder, SeedTieBreak};
