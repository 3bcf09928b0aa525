//! JSON level loader
//!
//! Resolves a level id to a bundled JSON file and decodes it in a single
//! pass. Any schema violation aborts the whole decode; unknown fields are
//! ignored so older builds can read newer level files.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::Level;

/// Directory holding bundled level files, relative to the working directory.
pub const LEVELS_DIR: &str = "assets/levels";

/// Minimal built-in level used when a requested level cannot be loaded.
const FALLBACK_LEVEL_JSON: &str = r#"{
    "id": "fallback",
    "name": "Quiet Meadow",
    "background": "bg_meadow",
    "searchItems": [
        {"type": "duck", "count": 10, "animation": "bobbing"}
    ]
}"#;

/// Errors that can occur when loading a level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// No bundled file exists for the requested level id.
    #[error("no level file for id '{id}'")]
    NotFound { id: String },

    /// The file exists but could not be read.
    #[error("failed to read level '{id}'")]
    Read {
        id: String,
        #[source]
        source: std::io::Error,
    },

    /// The data does not conform to the level schema.
    #[error("level data does not match the schema")]
    Schema {
        #[from]
        source: serde_json::Error,
    },
}

fn level_path(level_id: &str) -> PathBuf {
    Path::new(LEVELS_DIR).join(format!("{level_id}.json"))
}

/// Load a bundled level by id.
pub fn load(level_id: &str) -> Result<Level, LevelError> {
    let path = level_path(level_id);
    if !path.exists() {
        return Err(LevelError::NotFound {
            id: level_id.to_string(),
        });
    }

    let bytes = fs::read(&path).map_err(|source| LevelError::Read {
        id: level_id.to_string(),
        source,
    })?;
    load_from_slice(&bytes)
}

/// Decode a level straight from bytes, skipping resource resolution.
pub fn load_from_slice(bytes: &[u8]) -> Result<Level, LevelError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Load a level, substituting the built-in fallback on any failure.
pub fn load_or_fallback(level_id: &str) -> Level {
    match load(level_id) {
        Ok(level) => {
            log::info!(
                "Loaded level '{}' ({} items to find)",
                level.id,
                level.total_item_count()
            );
            level
        }
        Err(e) => {
            log::warn!("Failed to load level '{}': {}. Using fallback.", level_id, e);
            fallback_level()
        }
    }
}

/// The embedded fallback level: one item type, no zones.
pub fn fallback_level() -> Level {
    load_from_slice(FALLBACK_LEVEL_JSON.as_bytes()).unwrap_or_else(|e| {
        // The literal above is part of the build; reaching this means the
        // schema itself changed without updating it.
        log::error!("Embedded fallback level failed to decode: {}", e);
        Level {
            id: "fallback".to_string(),
            name: "Quiet Meadow".to_string(),
            background: "bg_meadow".to_string(),
            ambient_sound: None,
            search_items: Vec::new(),
            decorations: None,
            interactive_objects: None,
            particles: None,
            spawn_zones: None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::model::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_decode_full_level() {
        let json = r#"{
            "id": "test_level",
            "name": "Test Level",
            "background": "test_bg",
            "ambientSound": "ambient_forest",
            "searchItems": [
                {"type": "duck", "count": 3}
            ],
            "spawnZones": [[100, 100, 500, 500]]
        }"#;

        let level = load_from_slice(json.as_bytes()).unwrap();

        assert_eq!(level.id, "test_level");
        assert_eq!(level.name, "Test Level");
        assert_eq!(level.background, "test_bg");
        assert_eq!(level.ambient_sound.as_deref(), Some("ambient_forest"));
        assert_eq!(level.search_items.len(), 1);
        assert_eq!(level.search_items[0].kind, "duck");
        assert_eq!(level.search_items[0].count, 3);
    }

    #[test]
    fn test_scenario_from_design_doc() {
        let json = r#"{"id":"t","name":"T","background":"bg","searchItems":[{"type":"duck","count":3}],"spawnZones":[[100,100,500,500]]}"#;
        let level = load_from_slice(json.as_bytes()).unwrap();

        assert_eq!(level.id, "t");
        assert_eq!(level.total_item_count(), 3);

        let zones = level.spawn_zones.as_ref().unwrap();
        assert_eq!(zones.len(), 1);

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let p = zones[0].random_point(&mut rng);
            assert!(p.x >= 100.0 && p.x <= 500.0);
            assert!(p.y >= 100.0 && p.y <= 500.0);
        }
    }

    #[test]
    fn test_decode_explicit_positions() {
        let json = r#"{
            "id": "test",
            "name": "Test",
            "background": "bg",
            "searchItems": [
                {
                    "type": "duck",
                    "count": 2,
                    "positions": [
                        {"x": 100, "y": 200},
                        {"x": 300, "y": 400}
                    ]
                }
            ]
        }"#;

        let level = load_from_slice(json.as_bytes()).unwrap();
        let positions = level.search_items[0].positions.as_ref().unwrap();

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0], Point::new(100.0, 200.0));
        assert_eq!(positions[1], Point::new(300.0, 400.0));
    }

    #[test]
    fn test_decode_interactive_objects() {
        let json = r#"{
            "id": "test",
            "name": "Test",
            "background": "bg",
            "searchItems": [],
            "interactiveObjects": [
                {"type": "pig", "sound": "oink", "probability": 0.33}
            ]
        }"#;

        let level = load_from_slice(json.as_bytes()).unwrap();
        let interactive = &level.interactive_objects.as_ref().unwrap()[0];

        assert_eq!(interactive.kind, "pig");
        assert_eq!(interactive.sound, "oink");
        assert!((interactive.probability - 0.33).abs() < 0.001);
    }

    #[test]
    fn test_decode_particles() {
        let json = r#"{
            "id": "test",
            "name": "Test",
            "background": "bg",
            "searchItems": [],
            "particles": [
                {"type": "fireflies", "position": [100, 200]}
            ]
        }"#;

        let level = load_from_slice(json.as_bytes()).unwrap();
        let particle = &level.particles.as_ref().unwrap()[0];

        assert_eq!(particle.kind, "fireflies");
        assert_eq!(particle.point(), Point::new(100.0, 200.0));
    }

    #[test]
    fn test_missing_required_field_is_schema_error() {
        // No "background"
        let json = r#"{"id": "t", "name": "T", "searchItems": []}"#;
        let result = load_from_slice(json.as_bytes());
        assert!(matches!(result, Err(LevelError::Schema { .. })));
    }

    #[test]
    fn test_short_spawn_zone_is_schema_error() {
        let json = r#"{
            "id": "t", "name": "T", "background": "bg",
            "searchItems": [],
            "spawnZones": [[1, 2, 3]]
        }"#;
        let result = load_from_slice(json.as_bytes());
        assert!(matches!(result, Err(LevelError::Schema { .. })));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{
            "id": "t", "name": "T", "background": "bg",
            "searchItems": [],
            "futureFeature": {"nested": [1, 2, 3]}
        }"#;
        assert!(load_from_slice(json.as_bytes()).is_ok());
    }

    #[test]
    fn test_load_missing_id_is_not_found() {
        let result = load("no_such_level");
        assert!(matches!(result, Err(LevelError::NotFound { .. })));
    }

    #[test]
    fn test_fallback_level_is_valid() {
        let level = fallback_level();
        assert_eq!(level.id, "fallback");
        assert_eq!(level.search_items.len(), 1);
        assert!(level.total_item_count() > 0);
        assert!(level.spawn_zones.is_none());
    }
}
