//! The game session and what it hands to a frontend.
//!
//! - `session`: the tick loop tying board, turns, scores and opponent together
//! - `event`: what happened during a tick
//! - `view`: plain snapshots for rendering
//! - `layout`: surface geometry and pointer hit-testing

pub mod event;
pub mod layout;
pub mod session;
pub mod view;

pub use event::GameEvent;
pub use layout::{BoardLayout, PointerTarget, Rect};
pub use session::{GameSession, InputEvent};
pub use view::{CardFace, CardView, HudView, Outcome};
