//! The computer opponent.
//!
//! The opponent watches every card either player turns over and remembers
//! it. On its turn it first looks for a remembered pair; failing that it
//! flips two face-down cards at random.

pub mod memory;
pub mod policy;

pub use memory::OpponentMemory;
pub use policy::{OpponentMove, OpponentPolicy, RecallPolicy};
