//! Seekgrove - A cozy terminal hidden-object game
//!
//! Pan the camera across a hand-described scene and click the hidden
//! sprites before the clock embarrasses you.

pub mod audio;
pub mod game;
pub mod level;
pub mod placement;
pub mod render;
pub mod scene;
pub mod ui;

// Re-export commonly used types
pub use game::{Game, GameState};
pub use level::Level;
pub use placement::PlacementConfig;
