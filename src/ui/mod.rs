//! Terminal UI: plays a session in a ratatui/crossterm terminal.

mod app;
mod game_view;

pub use app::App;
