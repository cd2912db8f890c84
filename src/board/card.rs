//! Cards: identity, symbol, and face state.
//!
//! A `Card` is a fixed-shape record with a closed state tag. Its only
//! mutable parts are the tag and an optional in-flight flip animation, and
//! both change only through the methods here:
//!
//! - `start_flip` begins a reveal or hide (tag becomes `Flipping`)
//! - `advance_flip` applies the committed face at the flip midpoint
//! - `mark_matched` settles a found pair for good

use serde::{Deserialize, Serialize};

use crate::animation::{FlipAnimation, FlipEvent, FlipTarget};

/// Stable card index on the board (slot `0..N`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Slot index into the board.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Symbol class. Exactly two cards on a board share each symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u8);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Logical state of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face down and at rest (or finishing a hide flip).
    Hidden,
    /// First half of a flip; the new face is not committed yet.
    Flipping,
    /// Face up, part of the current selection.
    Revealed,
    /// Part of a found pair. Terminal.
    Matched,
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    symbol: SymbolId,
    state: CardState,
    flip: Option<FlipAnimation>,
}

impl Card {
    /// A hidden card at rest.
    #[must_use]
    pub fn new(id: CardId, symbol: SymbolId) -> Self {
        Self {
            id,
            symbol,
            state: CardState::Hidden,
            flip: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    #[must_use]
    pub fn state(&self) -> CardState {
        self.state
    }

    /// The in-flight flip, if any.
    #[must_use]
    pub fn flip(&self) -> Option<&FlipAnimation> {
        self.flip.as_ref()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.flip.is_some()
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Face down, at rest, and therefore eligible for selection.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.state == CardState::Hidden && self.flip.is_none()
    }

    /// Face up with its reveal animation fully played out.
    #[must_use]
    pub fn is_settled_face_up(&self) -> bool {
        self.state == CardState::Revealed && self.flip.is_none()
    }

    /// Attach a flip toward `target`.
    ///
    /// Refused (returns `false`) while another flip is in progress or once
    /// the card is matched.
    pub fn start_flip(&mut self, target: FlipTarget) -> bool {
        if self.flip.is_some() || self.is_matched() {
            return false;
        }
        self.flip = Some(FlipAnimation::new(target));
        self.state = CardState::Flipping;
        true
    }

    /// Advance the in-flight flip by one tick, applying its effect.
    pub fn advance_flip(&mut self) -> Option<FlipEvent> {
        let event = self.flip.as_mut()?.advance();
        match event {
            Some(FlipEvent::Committed(target)) => {
                if !self.is_matched() {
                    self.state = match target {
                        FlipTarget::Reveal => CardState::Revealed,
                        FlipTarget::Hide => CardState::Hidden,
                    };
                }
            }
            Some(FlipEvent::Finished) => self.flip = None,
            None => {}
        }
        event
    }

    /// Settle this card as half of a found pair.
    pub fn mark_matched(&mut self) {
        self.state = CardState::Matched;
    }

    /// Whether the renderer should draw the symbol side.
    #[must_use]
    pub fn shows_face(&self) -> bool {
        match self.state {
            CardState::Revealed | CardState::Matched => true,
            CardState::Hidden => false,
            // Before the midpoint the old face is still showing
            CardState::Flipping => {
                matches!(self.flip.map(|f| f.target()), Some(FlipTarget::Hide))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(CardId::new(3), SymbolId::new(1))
    }

    fn run_flip(card: &mut Card) -> Vec<FlipEvent> {
        let mut events = Vec::new();
        while card.is_animating() {
            if let Some(event) = card.advance_flip() {
                events.push(event);
            }
        }
        events
    }

    #[test]
    fn test_new_card_is_hidden_and_selectable() {
        let card = card();
        assert_eq!(card.state(), CardState::Hidden);
        assert!(card.is_selectable());
        assert!(!card.shows_face());
        assert_eq!(card.id().index(), 3);
    }

    #[test]
    fn test_reveal_cycle() {
        let mut card = card();
        assert!(card.start_flip(FlipTarget::Reveal));
        assert_eq!(card.state(), CardState::Flipping);
        assert!(!card.shows_face());
        assert!(!card.is_selectable());

        for _ in 0..4 {
            card.advance_flip();
        }
        assert_eq!(card.state(), CardState::Flipping);

        card.advance_flip();
        assert_eq!(card.state(), CardState::Revealed);
        assert!(card.shows_face());
        assert!(!card.is_settled_face_up());

        let rest = run_flip(&mut card);
        assert_eq!(rest, vec![FlipEvent::Finished]);
        assert!(card.is_settled_face_up());
    }

    #[test]
    fn test_hide_cycle() {
        let mut card = card();
        card.start_flip(FlipTarget::Reveal);
        run_flip(&mut card);

        assert!(card.start_flip(FlipTarget::Hide));
        assert!(card.shows_face());
        let events = run_flip(&mut card);
        assert_eq!(
            events,
            vec![FlipEvent::Committed(FlipTarget::Hide), FlipEvent::Finished]
        );
        assert_eq!(card.state(), CardState::Hidden);
        assert!(card.is_selectable());
    }

    #[test]
    fn test_second_flip_refused_while_animating() {
        let mut card = card();
        assert!(card.start_flip(FlipTarget::Reveal));
        assert!(!card.start_flip(FlipTarget::Hide));
        assert_eq!(card.flip().map(|f| f.target()), Some(FlipTarget::Reveal));
    }

    #[test]
    fn test_matched_card_never_flips_back() {
        let mut card = card();
        card.start_flip(FlipTarget::Reveal);
        run_flip(&mut card);
        card.mark_matched();

        assert!(!card.start_flip(FlipTarget::Hide));
        assert_eq!(card.state(), CardState::Matched);
        assert!(card.shows_face());
        assert!(!card.is_selectable());
    }

    #[test]
    fn test_commit_does_not_override_match() {
        let mut card = card();
        card.start_flip(FlipTarget::Reveal);
        card.mark_matched();
        run_flip(&mut card);
        assert_eq!(card.state(), CardState::Matched);
    }
}
