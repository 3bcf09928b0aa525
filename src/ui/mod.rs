//! User Interface module
//!
//! Terminal UI using ratatui: scene viewport, HUD counters, victory screen.

pub mod app;

pub use app::App;
