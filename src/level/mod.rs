//! Level data model and loading
//!
//! A level is described by an external JSON file and decoded into an
//! immutable [`Level`] once at load time. On any load failure the game
//! substitutes a built-in minimal fallback level.

pub mod loader;
pub mod model;

pub use loader::{load, load_from_slice, load_or_fallback, LevelError};
pub use model::{
    AnimationKind, DecorationSpec, InteractiveObjectSpec, Level, ParticleSpec, Point, Rect,
    SearchItemSpec, SpawnZone,
};
