//! Rendering abstraction layer
//!
//! Sprites are drawn as colored glyphs; the viewport projects world units
//! onto terminal cells and the camera decides which slice of the world is
//! visible.

pub mod mode;
pub mod sprites;
pub mod viewport;

pub use mode::{detect_render_mode, RenderMode};
pub use sprites::sprite_glyph;
pub use viewport::{Camera, Viewport};
