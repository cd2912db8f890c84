//! # memory-match
//!
//! A two-player memory card game engine: a human against a computer
//! opponent that remembers every card it has seen.
//!
//! ## Design Principles
//!
//! 1. **Explicit session state**: everything lives in one `GameSession`,
//!    advanced by `tick(now)`. No globals, no wall-clock reads.
//!
//! 2. **Time is data**: every delay is an elapsed-time comparison against a
//!    recorded `Timestamp`, so a whole game can be replayed deterministically
//!    from a seed and a list of inputs.
//!
//! 3. **Rules and visuals are decoupled**: flip animations only advance
//!    per-card progress. The turn controller decides when cards settle.
//!
//! ## Modules
//!
//! - `core`: players, scores, RNG, clock, configuration
//! - `board`: cards and the grid that owns them
//! - `animation`: per-card flip progression
//! - `turn`: turn state machine and pair resolution
//! - `opponent`: opponent memory and decision policy
//! - `game`: the session tick loop, events, render snapshots, hit-testing
//! - `ui` (feature `tui`): terminal frontend

pub mod animation;
pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod opponent;
pub mod turn;

#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Player, Scores, Timestamp, Timings};

pub use crate::board::{Board, Card, CardId, CardState, SymbolId};

pub use crate::animation::{FlipAnimation, FlipEvent, FlipTarget};

pub use crate::turn::{Rejection, Resolution, TurnController, TurnState};

pub use crate::opponent::{OpponentMemory, OpponentMove, OpponentPolicy, RecallPolicy};

pub use crate::game::{
    BoardLayout, CardFace, CardView, GameEvent, GameSession, HudView, InputEvent, Outcome, PointerTarget,
};

pub use crate::error::ConfigError;
