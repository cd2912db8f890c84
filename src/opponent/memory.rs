//! What the opponent has seen.
//!
//! Every card either player turns face up is recorded here, keyed by its
//! symbol. Symbols are remembered in first-seen order so that, for a given
//! memory state, the opponent's choice is deterministic.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::board::{Board, CardId, SymbolId};

/// Ordered mapping from symbol to the cards seen showing it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpponentMemory {
    /// Symbols in first-seen order.
    order: Vec<SymbolId>,
    /// Cards seen per symbol, in first-seen order.
    seen: FxHashMap<SymbolId, SmallVec<[CardId; 2]>>,
}

impl OpponentMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember that `card` shows `symbol`. Repeats are ignored.
    pub fn observe(&mut self, symbol: SymbolId, card: CardId) {
        let cards = self.seen.entry(symbol).or_insert_with(|| {
            self.order.push(symbol);
            SmallVec::new()
        });
        if !cards.contains(&card) {
            cards.push(card);
        }
    }

    /// Cards remembered for `symbol`, earliest first.
    #[must_use]
    pub fn cards_for(&self, symbol: SymbolId) -> &[CardId] {
        self.seen.get(&symbol).map(|cards| cards.as_slice()).unwrap_or(&[])
    }

    /// Remembered symbols in first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.order.iter().copied()
    }

    /// Number of distinct symbols remembered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }

    /// The first remembered symbol with two unmatched cards on `board`.
    ///
    /// Returns the earliest two such cards, earliest first.
    #[must_use]
    pub fn known_pair(&self, board: &Board) -> Option<(SymbolId, [CardId; 2])> {
        self.symbols().find_map(|symbol| {
            let mut unmatched = self
                .cards_for(symbol)
                .iter()
                .copied()
                .filter(|&id| board.card_at(id).is_some_and(|c| !c.is_matched()));
            match (unmatched.next(), unmatched.next()) {
                (Some(first), Some(second)) => Some((symbol, [first, second])),
                _ => None,
            }
        })
    }
}
