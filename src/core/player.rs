//! Player identification and per-player score storage.
//!
//! ## Player
//!
//! The two seats at the table: the human at the keyboard and the computer
//! opponent.
//!
//! ## Scores
//!
//! Per-player match counters with O(1) access, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    /// The player who moves after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }

    /// Dense index (0 for the human, 1 for the opponent).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Human => 0,
            Player::Opponent => 1,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Opponent => "Computer",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Matched-pair counters for both players.
///
/// ```
/// use memory_match::core::{Player, Scores};
///
/// let mut scores = Scores::default();
/// scores.award(Player::Opponent);
///
/// assert_eq!(scores[Player::Human], 0);
/// assert_eq!(scores[Player::Opponent], 1);
/// assert_eq!(scores.total(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    data: [u32; 2],
}

impl Scores {
    /// Credit one matched pair to `player`.
    pub fn award(&mut self, player: Player) {
        self.data[player.index()] += 1;
    }

    /// Pairs matched by both players together.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.data.iter().sum()
    }

    /// The player with strictly more pairs, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        let human = self[Player::Human];
        let opponent = self[Player::Opponent];
        match human.cmp(&opponent) {
            std::cmp::Ordering::Greater => Some(Player::Human),
            std::cmp::Ordering::Less => Some(Player::Opponent),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Index<Player> for Scores {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl IndexMut<Player> for Scores {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_alternates() {
        assert_eq!(Player::Human.other(), Player::Opponent);
        assert_eq!(Player::Opponent.other(), Player::Human);
        assert_eq!(Player::Human.other().other(), Player::Human);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::Human), "Human");
        assert_eq!(format!("{}", Player::Opponent), "Computer");
    }

    #[test]
    fn test_scores_award_and_total() {
        let mut scores = Scores::default();
        scores.award(Player::Human);
        scores.award(Player::Human);
        scores.award(Player::Opponent);

        assert_eq!(scores[Player::Human], 2);
        assert_eq!(scores[Player::Opponent], 1);
        assert_eq!(scores.total(), 3);
    }

    #[test]
    fn test_scores_leader() {
        let mut scores = Scores::default();
        assert_eq!(scores.leader(), None);

        scores[Player::Opponent] = 3;
        assert_eq!(scores.leader(), Some(Player::Opponent));

        scores[Player::Human] = 4;
        assert_eq!(scores.leader(), Some(Player::Human));
    }

    #[test]
    fn test_scores_serde() {
        let mut scores = Scores::default();
        scores.award(Player::Human);

        let json = serde_json::to_string(&scores).unwrap();
        let restored: Scores = serde_json::from_str(&json).unwrap();
        assert_eq!(scores, restored);
    }
}
