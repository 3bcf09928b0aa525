//! Sound definitions and mappings
//!
//! Defines all sound events used in the game.

use std::path::Path;

/// Sound event identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    // === Gameplay ===
    /// A search item was found
    ItemFound,
    /// All items found, level complete
    Victory,
    /// A new level started
    LevelStart,

    // === Interactions ===
    /// Pig tapped
    Oink,
    /// Cat tapped
    Meow,
    /// Dog tapped
    Woof,
    /// Any other interactive object
    Chime,

    // === UI ===
    /// Button pressed (next level / restart)
    MenuSelect,

    // === Ambient ===
    /// Daytime meadow loop
    AmbientMeadow,
    /// Evening forest loop
    AmbientForest,
}

impl SoundId {
    /// Get the file path for this sound
    pub fn file_path(&self) -> &'static str {
        match self {
            SoundId::ItemFound => "assets/sounds/gameplay/item_found.ogg",
            SoundId::Victory => "assets/sounds/gameplay/victory.ogg",
            SoundId::LevelStart => "assets/sounds/gameplay/level_start.ogg",

            SoundId::Oink => "assets/sounds/interactions/oink.ogg",
            SoundId::Meow => "assets/sounds/interactions/meow.ogg",
            SoundId::Woof => "assets/sounds/interactions/woof.ogg",
            SoundId::Chime => "assets/sounds/interactions/chime.ogg",

            SoundId::MenuSelect => "assets/sounds/ui/select.ogg",

            SoundId::AmbientMeadow => "assets/sounds/ambient/meadow.ogg",
            SoundId::AmbientForest => "assets/sounds/ambient/forest.ogg",
        }
    }

    /// Get the default volume for this sound (0.0 - 1.0)
    pub fn default_volume(&self) -> f64 {
        match self {
            SoundId::AmbientMeadow | SoundId::AmbientForest => 0.3,
            SoundId::MenuSelect => 0.5,
            SoundId::Oink | SoundId::Meow | SoundId::Woof | SoundId::Chime => 0.6,
            SoundId::ItemFound | SoundId::LevelStart => 0.7,
            SoundId::Victory => 0.8,
        }
    }

    /// Resolve a level-data sound key (e.g. an interactive object's `sound`
    /// field or a level's `ambientSound`) to a sound event.
    pub fn from_key(key: &str) -> Option<SoundId> {
        match key {
            "oink" => Some(SoundId::Oink),
            "meow" => Some(SoundId::Meow),
            "woof" => Some(SoundId::Woof),
            "chime" => Some(SoundId::Chime),
            "ambient_meadow" => Some(SoundId::AmbientMeadow),
            "ambient_forest" => Some(SoundId::AmbientForest),
            _ => None,
        }
    }

    /// Check if the sound file exists
    pub fn exists(&self) -> bool {
        Path::new(self.file_path()).exists()
    }
}

/// Categories for organizing sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCategory {
    Gameplay,
    Interaction,
    Ui,
    Ambient,
}

impl SoundId {
    /// Get the category for this sound
    pub fn category(&self) -> SoundCategory {
        match self {
            SoundId::ItemFound | SoundId::Victory | SoundId::LevelStart => SoundCategory::Gameplay,
            SoundId::Oink | SoundId::Meow | SoundId::Woof | SoundId::Chime => {
                SoundCategory::Interaction
            }
            SoundId::MenuSelect => SoundCategory::Ui,
            SoundId::AmbientMeadow | SoundId::AmbientForest => SoundCategory::Ambient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_known_and_unknown() {
        assert_eq!(SoundId::from_key("oink"), Some(SoundId::Oink));
        assert_eq!(SoundId::from_key("ambient_forest"), Some(SoundId::AmbientForest));
        assert_eq!(SoundId::from_key("kazoo"), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(SoundId::ItemFound.category(), SoundCategory::Gameplay);
        assert_eq!(SoundId::Meow.category(), SoundCategory::Interaction);
        assert_eq!(SoundId::AmbientMeadow.category(), SoundCategory::Ambient);
    }
}
