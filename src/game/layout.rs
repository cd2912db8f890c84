//! Screen geometry and pointer hit-testing.
//!
//! The grid is laid out on an 800x600 surface: square cards with a fixed
//! gap, horizontally centred, starting 130px from the top. A restart button
//! sits centred under the grid.

use serde::{Deserialize, Serialize};

use crate::board::CardId;

pub const SURFACE_WIDTH: i32 = 800;
pub const SURFACE_HEIGHT: i32 = 600;
pub const CARD_SIZE: i32 = 85;
pub const CARD_GAP: i32 = 10;
pub const GRID_TOP: i32 = 130;

const RESTART_WIDTH: i32 = 160;
const RESTART_HEIGHT: i32 = 40;
const RESTART_MARGIN: i32 = 20;

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[must_use]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// What a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerTarget {
    Card(CardId),
    Restart,
    Miss,
}

/// Card and button placement for a `rows` x `cols` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    rows: usize,
    cols: usize,
    grid: Rect,
    restart: Rect,
}

impl BoardLayout {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let span = |n: usize| {
            let n = n as i32;
            (n * CARD_SIZE + (n - 1).max(0) * CARD_GAP).max(0)
        };
        let (width, height) = (span(cols), span(rows));
        let grid = Rect::new((SURFACE_WIDTH - width) / 2, GRID_TOP, width, height);
        let restart = Rect::new(
            (SURFACE_WIDTH - RESTART_WIDTH) / 2,
            grid.y + grid.height + RESTART_MARGIN,
            RESTART_WIDTH,
            RESTART_HEIGHT,
        );
        Self {
            rows,
            cols,
            grid,
            restart,
        }
    }

    /// Bounds of the whole card grid.
    #[must_use]
    pub fn grid(&self) -> Rect {
        self.grid
    }

    #[must_use]
    pub fn restart_button(&self) -> Rect {
        self.restart
    }

    /// Bounds of the card in `slot`.
    #[must_use]
    pub fn slot_rect(&self, slot: usize) -> Option<Rect> {
        if slot >= self.rows * self.cols {
            return None;
        }
        let (row, col) = ((slot / self.cols) as i32, (slot % self.cols) as i32);
        Some(Rect::new(
            self.grid.x + col * (CARD_SIZE + CARD_GAP),
            self.grid.y + row * (CARD_SIZE + CARD_GAP),
            CARD_SIZE,
            CARD_SIZE,
        ))
    }

    /// Map a pointer position to a card, the restart button, or nothing.
    #[must_use]
    pub fn hit_test(&self, x: i32, y: i32) -> PointerTarget {
        if self.restart.contains(x, y) {
            return PointerTarget::Restart;
        }
        if !self.grid.contains(x, y) {
            return PointerTarget::Miss;
        }

        let pitch = CARD_SIZE + CARD_GAP;
        let (dx, dy) = (x - self.grid.x, y - self.grid.y);
        if dx % pitch >= CARD_SIZE || dy % pitch >= CARD_SIZE {
            return PointerTarget::Miss;
        }
        let slot = (dy / pitch) as usize * self.cols + (dx / pitch) as usize;
        PointerTarget::Card(CardId::new(slot as u16))
    }
}
