//! Audio system
//!
//! Fire-and-forget sound effects using the Kira audio library. The game
//! notifies the manager when an item is found, a level is completed, or an
//! interactive object is tapped; a missing backend or missing files degrade
//! to silence.

pub mod manager;
pub mod sounds;

pub use manager::AudioManager;
pub use sounds::{SoundCategory, SoundId};
