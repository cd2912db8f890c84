//! Two-phase card flip.
//!
//! A flip shrinks the card to a vertical line and grows it back. Progress
//! runs 0 -> 0.5 while closing, then 0.5 -> 0 while opening, one tenth per
//! tick. The logical face change is committed exactly once, on the tick the
//! midpoint is reached, so game logic reading the card state right after a
//! tick never sees a half-applied flip.
//!
//! ```
//! use memory_match::animation::{FlipAnimation, FlipEvent, FlipTarget};
//!
//! let mut flip = FlipAnimation::new(FlipTarget::Reveal);
//! let events: Vec<_> = (0..10).filter_map(|_| flip.advance()).collect();
//!
//! assert_eq!(events, vec![FlipEvent::Committed(FlipTarget::Reveal), FlipEvent::Finished]);
//! ```

use serde::{Deserialize, Serialize};

/// Ticks in a full flip cycle.
pub const FLIP_TICKS: u8 = 10;

/// Ticks from the start of a flip to its midpoint.
pub const FLIP_MIDPOINT: u8 = FLIP_TICKS / 2;

/// The face a flip drives the card toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipTarget {
    Reveal,
    Hide,
}

/// Which half of the flip is playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipDirection {
    /// Progress increasing toward the midpoint (card shrinking).
    Closing,
    /// Progress decreasing back to zero (card growing).
    Opening,
}

/// Something a single tick of a flip did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipEvent {
    /// The midpoint was reached; the card must take on the target face now.
    Committed(FlipTarget),
    /// Progress returned to zero; the animation should be detached.
    Finished,
}

/// In-flight flip state, owned by the card it animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipAnimation {
    /// Progress in tenths, 0..=FLIP_MIDPOINT.
    step: u8,
    direction: FlipDirection,
    target: FlipTarget,
}

impl FlipAnimation {
    /// A fresh flip at progress 0, closing.
    #[must_use]
    pub const fn new(target: FlipTarget) -> Self {
        Self {
            step: 0,
            direction: FlipDirection::Closing,
            target,
        }
    }

    /// Progress in `[0, 0.5]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        f32::from(self.step) / f32::from(FLIP_TICKS)
    }

    #[must_use]
    pub const fn direction(&self) -> FlipDirection {
        self.direction
    }

    #[must_use]
    pub const fn target(&self) -> FlipTarget {
        self.target
    }

    /// True once the logical face change has been committed.
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self.direction, FlipDirection::Opening)
    }

    /// Horizontal scale for rendering: 1 at rest, 0 at the midpoint.
    #[must_use]
    pub fn scale(&self) -> f32 {
        1.0 - 2.0 * self.progress()
    }

    /// Advance one tick.
    pub fn advance(&mut self) -> Option<FlipEvent> {
        match self.direction {
            FlipDirection::Closing => {
                self.step += 1;
                if self.step >= FLIP_MIDPOINT {
                    self.direction = FlipDirection::Opening;
                    return Some(FlipEvent::Committed(self.target));
                }
                None
            }
            FlipDirection::Opening => {
                self.step = self.step.saturating_sub(1);
                (self.step == 0).then_some(FlipEvent::Finished)
            }
        }
    }
}
