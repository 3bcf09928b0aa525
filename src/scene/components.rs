//! Scene entity components

use crate::level::Point;

/// Base position of a sprite in world units. The rendered position is this
/// plus the current animation offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Point);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Point::new(x, y))
    }
}

/// Asset type key resolved to a drawable by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteKey(pub String);

impl SpriteKey {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }
}

/// Draw order; higher layers draw on top.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Layer(pub f32);

/// Marks an entity the player must find.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searchable {
    pub found: bool,
}

/// An entity that plays a sound when tapped, with some probability.
#[derive(Debug, Clone)]
pub struct Interactive {
    /// Sound key passed to the audio manager
    pub sound: String,
    /// Chance (0.0 - 1.0) a tap triggers the sound
    pub probability: f64,
}
