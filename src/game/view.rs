//! Render snapshots.
//!
//! The renderer never touches engine types directly; it draws from these
//! plain records, one per card plus one for the header.

use serde::{Deserialize, Serialize};

use crate::board::{Card, CardState, SymbolId};
use crate::core::{Player, Scores};
use crate::turn::TurnState;

/// Which side of a card to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    Back,
    Face,
    /// Face up and highlighted as part of a found pair.
    Matched,
}

/// Everything needed to draw one card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    /// Grid slot, row-major.
    pub slot: usize,
    pub symbol: SymbolId,
    pub face: CardFace,
    /// Horizontal scale in `[0, 1]`; below 1 while flipping.
    pub scale: f32,
    /// Part of the current, unresolved selection.
    pub selected: bool,
}

impl CardView {
    #[must_use]
    pub fn of(card: &Card, selected: bool) -> Self {
        let face = match card.state() {
            CardState::Matched => CardFace::Matched,
            _ if card.shows_face() => CardFace::Face,
            _ => CardFace::Back,
        };
        Self {
            slot: card.id().index(),
            symbol: card.symbol(),
            face,
            scale: card.flip().map_or(1.0, |f| f.scale()),
            selected,
        }
    }
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &Scores) -> Self {
        scores.leader().map_or(Outcome::Draw, Outcome::Winner)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins"),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

/// Header/overlay snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudView {
    pub current_player: Player,
    pub turn_state: TurnState,
    pub human_score: u32,
    pub opponent_score: u32,
    pub game_over: bool,
    /// Set once the game is over.
    pub outcome: Option<Outcome>,
}
