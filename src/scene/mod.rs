//! Scene entities and world building
//!
//! The scene is a `hecs` world acting as the render-entity registry: every
//! sprite (searchable item, decoration, interactive object, particle) is an
//! entity with a position, a sprite key and an animation controller.

pub mod animation;
pub mod builder;
pub mod components;

pub use animation::AnimationController;
pub use builder::{WorldBuilder, WORLD_HEIGHT, WORLD_WIDTH};
pub use components::{Interactive, Layer, Position, Searchable, SpriteKey};
