//! Turn controller: whose turn it is, pending selections, and the timed
//! transitions between reveal, settlement and hand-over.
//!
//! Game over is not a state here. The session derives it from the scores
//! and simply stops driving the controller.

pub mod controller;

pub use controller::{Rejection, Resolution, Selected, TurnController, TurnState};
