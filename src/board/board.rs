//! The card grid.
//!
//! Cards live in an `im::Vector` so a board can be cloned in O(1) for
//! render snapshots and tests without copying every card.

use im::Vector;
use smallvec::SmallVec;

use super::card::{Card, CardId, SymbolId};
use crate::animation::{FlipEvent, FlipTarget};
use crate::core::config::MAX_SYMBOLS;
use crate::core::{GameConfig, GameRng};
use crate::error::ConfigError;

/// The grid of cards.
///
/// ## Usage
///
/// ```
/// use memory_match::board::{Board, CardState};
/// use memory_match::core::{GameConfig, GameRng};
///
/// let mut rng = GameRng::new(42);
/// let board = Board::shuffled(&GameConfig::default(), &mut rng).unwrap();
///
/// assert_eq!(board.card_count(), 16);
/// assert!(board.cards().all(|c| c.state() == CardState::Hidden));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cards: Vector<Card>,
}

impl Board {
    /// Build a uniformly shuffled board for `config`.
    ///
    /// Every symbol is placed exactly twice; all cards start hidden.
    pub fn shuffled(config: &GameConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut symbols: Vec<SymbolId> = (0..config.symbols)
            .flat_map(|s| {
                let symbol = SymbolId::new(s as u8);
                [symbol, symbol]
            })
            .collect();
        rng.shuffle(&mut symbols);

        Self::from_symbols(config.rows, config.cols, symbols)
    }

    /// Build a board with a fixed layout, slot by slot.
    ///
    /// Fails unless the layout fills the grid and every symbol appears
    /// exactly twice.
    pub fn from_symbols(rows: usize, cols: usize, symbols: Vec<SymbolId>) -> Result<Self, ConfigError> {
        let cards = rows * cols;
        if cards == 0 {
            return Err(ConfigError::EmptyBoard { rows, cols });
        }
        if cards % 2 != 0 {
            return Err(ConfigError::OddCardCount(cards));
        }
        if symbols.len() != cards {
            return Err(ConfigError::Validation(format!(
                "layout has {} symbols for a {}x{} grid",
                symbols.len(),
                rows,
                cols
            )));
        }

        let mut counts = [0usize; MAX_SYMBOLS];
        for symbol in &symbols {
            counts[usize::from(symbol.raw())] += 1;
        }
        if let Some((symbol, &count)) = counts.iter().enumerate().find(|&(_, &n)| n != 0 && n != 2) {
            return Err(ConfigError::UnpairedSymbol {
                symbol: symbol as u8,
                count,
            });
        }

        Ok(Self::deal(rows, cols, symbols))
    }

    /// A fresh board with the same deck, reshuffled and all face down.
    ///
    /// The deck already satisfies the pair invariant, so this cannot fail.
    #[must_use]
    pub fn reshuffled(&self, rng: &mut GameRng) -> Self {
        let mut symbols: Vec<SymbolId> = self.cards.iter().map(Card::symbol).collect();
        // Canonical order first so the result depends only on the rng
        symbols.sort_unstable();
        rng.shuffle(&mut symbols);
        Self::deal(self.rows, self.cols, symbols)
    }

    fn deal(rows: usize, cols: usize, symbols: Vec<SymbolId>) -> Self {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(slot, symbol)| Card::new(CardId::new(slot as u16), symbol))
            .collect();
        Self { rows, cols, cards }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cards (N).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Number of pairs (K = N / 2).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Read view of the card in slot `id`.
    #[must_use]
    pub fn card_at(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// All cards in slot order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards that may currently be selected: hidden and not animating.
    #[must_use]
    pub fn selectable_cards(&self) -> SmallVec<[CardId; 32]> {
        self.cards
            .iter()
            .filter(|c| c.is_selectable())
            .map(Card::id)
            .collect()
    }

    /// Pairs settled as matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count() / 2
    }

    /// Whether any card has a flip in flight.
    #[must_use]
    pub fn has_animations(&self) -> bool {
        self.cards.iter().any(Card::is_animating)
    }

    /// Start a flip on one card. See [`Card::start_flip`].
    pub fn start_flip(&mut self, id: CardId, target: FlipTarget) -> bool {
        self.cards
            .get_mut(id.index())
            .is_some_and(|card| card.start_flip(target))
    }

    /// Settle one card as matched.
    pub fn mark_matched(&mut self, id: CardId) {
        if let Some(card) = self.cards.get_mut(id.index()) {
            card.mark_matched();
        }
    }

    /// Advance every in-flight flip by one tick.
    ///
    /// Returns what happened to each card that reported an event, in slot
    /// order.
    pub fn advance_animations(&mut self) -> Vec<(CardId, FlipEvent)> {
        let mut events = Vec::new();
        for card in self.cards.iter_mut().filter(|c| c.is_animating()) {
            if let Some(event) = card.advance_flip() {
                events.push((card.id(), event));
            }
        }
        events
    }
}
