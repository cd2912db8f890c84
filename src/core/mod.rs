//! Core engine types: players, scores, RNG, clock, configuration.
//!
//! These are the building blocks every other module shares. None of them
//! know anything about cards or turns.

pub mod clock;
pub mod config;
pub mod player;
pub mod rng;

pub use clock::Timestamp;
pub use config::{GameConfig, Timings, MAX_SYMBOLS};
pub use player::{Player, Scores};
pub use rng::GameRng;
