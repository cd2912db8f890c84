//! Card flip animation.
//!
//! Animations are purely per-card and know nothing about turns or scoring.
//! The board advances every in-flight flip once per tick and applies the
//! committed face change to the card.

pub mod flip;

pub use flip::{FlipAnimation, FlipDirection, FlipEvent, FlipTarget, FLIP_MIDPOINT, FLIP_TICKS};
