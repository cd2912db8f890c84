//! Board model: the grid of cards and their states.
//!
//! The board enforces the pair invariant at construction (every symbol on
//! exactly two cards) and owns each card's flip animation. It has no notion
//! of players or turns.

#[allow(clippy::module_inception)]
mod board;
pub mod card;

pub use board::Board;
pub use card::{Card, CardId, CardState, SymbolId};
