//! Things that happen during a tick.
//!
//! The session returns these from every `tick` so a frontend can play
//! sounds, show messages, or keep a log without diffing snapshots.

use serde::Serialize;

use super::view::Outcome;
use crate::board::{CardId, SymbolId};
use crate::core::{Player, Scores};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A player's selection was accepted and the card began revealing.
    CardSelected {
        player: Player,
        card: CardId,
        symbol: SymbolId,
    },
    /// A reveal flip passed its midpoint.
    CardFaceUp { card: CardId },
    /// A hide flip passed its midpoint.
    CardFaceDown { card: CardId },
    PairMatched {
        player: Player,
        pair: [CardId; 2],
        symbol: SymbolId,
    },
    PairMismatched { player: Player, pair: [CardId; 2] },
    TurnChanged { player: Player },
    GameOver { outcome: Outcome, scores: Scores },
    /// A new game began; `game` counts games in this session from 1.
    Restarted { game: u32 },
}
