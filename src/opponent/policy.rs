//! Opponent decision policies.
//!
//! The policy is a trait so the session can be driven by other opponents
//! (scripted ones in tests, for instance):
//! - `OpponentPolicy`: observe revealed cards, choose a pair to flip
//! - `RecallPolicy`: perfect recall of everything observed, random otherwise

use crate::board::{Board, CardId, SymbolId};
use crate::core::GameRng;

use super::memory::OpponentMemory;

/// A pair of cards the opponent has decided to flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpponentMove {
    /// Both cards were remembered showing `symbol`.
    Exploit { symbol: SymbolId, pair: [CardId; 2] },
    /// Two unknown cards picked at random.
    Explore { pair: [CardId; 2] },
}

impl OpponentMove {
    /// The two cards to flip, in order.
    #[must_use]
    pub fn pair(&self) -> [CardId; 2] {
        match *self {
            OpponentMove::Exploit { pair, .. } | OpponentMove::Explore { pair } => pair,
        }
    }
}

/// How the computer opponent picks its cards.
pub trait OpponentPolicy {
    /// Record a card seen face up, whoever revealed it.
    fn observe(&mut self, symbol: SymbolId, card: CardId);

    /// Choose the next pair to flip, or `None` if no pair is available.
    ///
    /// Only called when no selection is pending and the board is at rest.
    fn choose(&mut self, board: &Board) -> Option<OpponentMove>;

    /// Forget everything and continue with a fresh random stream.
    fn reset(&mut self, rng: GameRng);
}

/// Remembers every observed card and flips a known pair whenever it has one.
///
/// Otherwise picks two face-down cards uniformly at random.
#[derive(Clone, Debug)]
pub struct RecallPolicy {
    memory: OpponentMemory,
    rng: GameRng,
}

impl RecallPolicy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            memory: OpponentMemory::new(),
            rng,
        }
    }

    /// Read access to what the opponent remembers.
    #[must_use]
    pub fn memory(&self) -> &OpponentMemory {
        &self.memory
    }
}

impl OpponentPolicy for RecallPolicy {
    fn observe(&mut self, symbol: SymbolId, card: CardId) {
        self.memory.observe(symbol, card);
    }

    fn choose(&mut self, board: &Board) -> Option<OpponentMove> {
        if let Some((symbol, pair)) = self.memory.known_pair(board) {
            return Some(OpponentMove::Exploit { symbol, pair });
        }

        let face_down = board.selectable_cards();
        let (a, b) = self.rng.sample_pair(face_down.len())?;
        Some(OpponentMove::Explore {
            pair: [face_down[a], face_down[b]],
        })
    }

    fn reset(&mut self, rng: GameRng) {
        self.memory.clear();
        self.rng = rng;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        // 0 1 2
        // 2 1 0
        let symbols = [0, 1, 2, 2, 1, 0].into_iter().map(SymbolId::new).collect();
        Board::from_symbols(2, 3, symbols).unwrap()
    }

    #[test]
    fn test_exploits_known_pair() {
        let board = board();
        let mut policy = RecallPolicy::new(GameRng::new(1));
        policy.observe(SymbolId::new(2), CardId::new(3));
        policy.observe(SymbolId::new(2), CardId::new(2));

        assert_eq!(
            policy.choose(&board),
            Some(OpponentMove::Exploit {
                symbol: SymbolId::new(2),
                pair: [CardId::new(3), CardId::new(2)],
            })
        );
    }

    #[test]
    fn test_explores_face_down_cards() {
        let mut board = board();
        board.mark_matched(CardId::new(0));
        board.mark_matched(CardId::new(5));
        let mut policy = RecallPolicy::new(GameRng::new(1));

        for _ in 0..50 {
            let Some(OpponentMove::Explore { pair: [a, b] }) = policy.choose(&board) else {
                panic!("expected an exploring move");
            };
            assert_ne!(a, b);
            for id in [a, b] {
                assert!(board.card_at(id).unwrap().is_selectable());
            }
        }
    }

    #[test]
    fn test_single_known_card_does_not_exploit() {
        let board = board();
        let mut policy = RecallPolicy::new(GameRng::new(1));
        policy.observe(SymbolId::new(1), CardId::new(1));

        assert!(matches!(policy.choose(&board), Some(OpponentMove::Explore { .. })));
    }

    #[test]
    fn test_no_move_with_fewer_than_two_face_down() {
        let mut board = board();
        for id in 0..4 {
            board.mark_matched(CardId::new(id));
        }
        board.start_flip(CardId::new(4), crate::animation::FlipTarget::Reveal);
        let mut policy = RecallPolicy::new(GameRng::new(1));

        assert_eq!(policy.choose(&board), None);
    }

    #[test]
    fn test_reset_forgets() {
        let board = board();
        let mut policy = RecallPolicy::new(GameRng::new(1));
        policy.observe(SymbolId::new(0), CardId::new(0));
        policy.observe(SymbolId::new(0), CardId::new(5));

        policy.reset(GameRng::new(2));
        assert!(policy.memory().is_empty());
        assert!(matches!(policy.choose(&board), Some(OpponentMove::Explore { .. })));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = board();
        let mut p1 = RecallPolicy::new(GameRng::new(9));
        let mut p2 = RecallPolicy::new(GameRng::new(9));

        for _ in 0..10 {
            assert_eq!(p1.choose(&board), p2.choose(&board));
        }
    }
}
