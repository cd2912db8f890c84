//! Turn state machine.
//!
//! ```text
//!  HumanTurn / OpponentTurn ──2nd card──▶ Resolving ──reveal delay──▶ Switching
//!           ▲                                                          │
//!           └──────────────────── switch delay, other player ◀─────────┘
//! ```
//!
//! All delays are elapsed-time checks against the timestamp a phase was
//! entered; nothing here blocks or schedules callbacks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::animation::FlipTarget;
use crate::board::{Board, CardId, SymbolId};
use crate::core::{Player, Scores, Timestamp, Timings};

/// Externally visible turn state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    HumanTurn,
    OpponentTurn,
    /// Two cards are face up, waiting out the reveal delay.
    Resolving,
    /// The pair is settled, waiting out the switch delay.
    Switching,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Selecting,
    Resolving { since: Timestamp },
    Switching { since: Timestamp },
}

/// Why a selection was ignored.
///
/// These are ordinary UI races, never shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// A pair is resolving or the turn is switching.
    NotSelecting,
    /// The selecting player is not the current player.
    NotYourTurn,
    /// Two cards are already selected.
    SelectionFull,
    /// The card is already in the selection buffer.
    AlreadySelected,
    /// No card in that slot.
    UnknownCard,
    /// The card is face up, matched, or mid-flip.
    NotSelectable,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Rejection::NotSelecting => "not accepting selections",
            Rejection::NotYourTurn => "not this player's turn",
            Rejection::SelectionFull => "two cards already selected",
            Rejection::AlreadySelected => "card already selected",
            Rejection::UnknownCard => "no such card",
            Rejection::NotSelectable => "card is not face down",
        };
        f.write_str(reason)
    }
}

/// An accepted selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selected {
    /// First card of the pair.
    First,
    /// Second card; the pair is now resolving.
    PairComplete,
}

/// How a resolved pair was settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Matched {
        player: Player,
        pair: [CardId; 2],
        symbol: SymbolId,
    },
    Mismatched {
        player: Player,
        pair: [CardId; 2],
    },
}

impl Resolution {
    #[must_use]
    pub fn pair(&self) -> [CardId; 2] {
        match *self {
            Resolution::Matched { pair, .. } | Resolution::Mismatched { pair, .. } => pair,
        }
    }

    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }
}

/// Whose turn it is, what they have selected, and the pending timers.
#[derive(Clone, Debug)]
pub struct TurnController {
    timings: Timings,
    current: Player,
    phase: Phase,
    selection: SmallVec<[CardId; 2]>,
    turn_started: Timestamp,
}

impl TurnController {
    /// A controller at the start of `first`'s turn.
    #[must_use]
    pub fn new(timings: Timings, first: Player, now: Timestamp) -> Self {
        Self {
            timings,
            current: first,
            phase: Phase::Selecting,
            selection: SmallVec::new(),
            turn_started: now,
        }
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        match (self.phase, self.current) {
            (Phase::Selecting, Player::Human) => TurnState::HumanTurn,
            (Phase::Selecting, Player::Opponent) => TurnState::OpponentTurn,
            (Phase::Resolving { .. }, _) => TurnState::Resolving,
            (Phase::Switching { .. }, _) => TurnState::Switching,
        }
    }

    /// The player whose turn it is (also during resolving and switching).
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Selected, unresolved cards in selection order.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// When the current player's turn began.
    #[must_use]
    pub fn turn_started(&self) -> Timestamp {
        self.turn_started
    }

    /// Try to add `card` to `player`'s selection and start revealing it.
    ///
    /// The second accepted card moves the controller to `Resolving` at `now`.
    pub fn select(
        &mut self,
        board: &mut Board,
        player: Player,
        card: CardId,
        now: Timestamp,
    ) -> Result<Selected, Rejection> {
        if self.phase != Phase::Selecting {
            return Err(Rejection::NotSelecting);
        }
        if self.current != player {
            return Err(Rejection::NotYourTurn);
        }
        if self.selection.len() >= 2 {
            return Err(Rejection::SelectionFull);
        }
        if self.selection.contains(&card) {
            return Err(Rejection::AlreadySelected);
        }
        let selectable = board.card_at(card).ok_or(Rejection::UnknownCard)?.is_selectable();
        if !selectable || !board.start_flip(card, FlipTarget::Reveal) {
            return Err(Rejection::NotSelectable);
        }

        self.selection.push(card);
        if self.selection.len() == 2 {
            self.phase = Phase::Resolving { since: now };
            Ok(Selected::PairComplete)
        } else {
            Ok(Selected::First)
        }
    }

    /// Settle a resolving pair once the reveal delay has passed.
    ///
    /// Both cards must also have finished their reveal flip. A match marks
    /// both cards and credits the current player; a mismatch starts hiding
    /// both. Either way the controller moves to `Switching` at `now`.
    pub fn settle(&mut self, board: &mut Board, scores: &mut Scores, now: Timestamp) -> Option<Resolution> {
        let Phase::Resolving { since } = self.phase else {
            return None;
        };
        if now.since(since) <= self.timings.reveal_delay_ms {
            return None;
        }
        let &[first, second] = self.selection.as_slice() else {
            return None;
        };
        let (a, b) = (board.card_at(first)?, board.card_at(second)?);
        if !a.is_settled_face_up() || !b.is_settled_face_up() {
            return None;
        }

        let player = self.current;
        let resolution = if a.symbol() == b.symbol() {
            let symbol = a.symbol();
            board.mark_matched(first);
            board.mark_matched(second);
            scores.award(player);
            Resolution::Matched {
                player,
                pair: [first, second],
                symbol,
            }
        } else {
            board.start_flip(first, FlipTarget::Hide);
            board.start_flip(second, FlipTarget::Hide);
            Resolution::Mismatched {
                player,
                pair: [first, second],
            }
        };

        self.phase = Phase::Switching { since: now };
        Some(resolution)
    }

    /// Hand the turn over once the switch delay has expired.
    ///
    /// Returns the player whose turn it now is.
    pub fn finish_switch(&mut self, now: Timestamp) -> Option<Player> {
        let Phase::Switching { since } = self.phase else {
            return None;
        };
        if now.since(since) < self.timings.switch_delay_ms {
            return None;
        }

        self.selection.clear();
        self.current = self.current.other();
        self.phase = Phase::Selecting;
        self.turn_started = now;
        Some(self.current)
    }
}
