//! Level descriptor types
//!
//! These mirror the JSON level schema one-to-one. Decorations, interactive
//! objects and particles are cosmetic: the model carries them through to the
//! scene builder without interpreting them.

use rand::Rng;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point.
    pub fn distance_sq(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// An axis-aligned rectangle in world units (origin + extent).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle encloses a positive area.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Sample a point uniformly inside the rectangle.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.gen_range(self.x..=self.x + self.width),
            rng.gen_range(self.y..=self.y + self.height),
        )
    }
}

/// Cosmetic animation applied to a sprite. Decoded from the level file and
/// handed to the scene untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    #[default]
    None,
    /// Clouds moving slowly
    Drifting,
    /// Water/river texture animation
    Flowing,
    /// Vehicle moving along a path
    Driving,
    /// Character walking back and forth
    Walking,
    /// Gentle bobbing on water
    Floating,
    /// Fire/light flickering
    Flickering,
    /// Trees/flowers swaying in wind
    Swaying,
    /// Idle slight movement
    Bobbing,
}

/// A playable level as described by its JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Unique level key
    pub id: String,
    /// Display name
    pub name: String,
    /// Background asset key
    pub background: String,
    /// Looping ambient sound key
    #[serde(default)]
    pub ambient_sound: Option<String>,
    /// Items the player must find, in HUD order
    pub search_items: Vec<SearchItemSpec>,
    /// Cosmetic scenery
    #[serde(default)]
    pub decorations: Option<Vec<DecorationSpec>>,
    /// Objects that react to taps with a sound
    #[serde(default)]
    pub interactive_objects: Option<Vec<InteractiveObjectSpec>>,
    /// Ambient particle emitters
    #[serde(default)]
    pub particles: Option<Vec<ParticleSpec>>,
    /// When present, random item positions are drawn only from these zones
    #[serde(default)]
    pub spawn_zones: Option<Vec<SpawnZone>>,
}

impl Level {
    /// Total number of item instances across all search item families.
    pub fn total_item_count(&self) -> u32 {
        self.search_items.iter().map(|item| item.count).sum()
    }

    /// Item type keys in HUD order.
    pub fn item_types(&self) -> Vec<&str> {
        self.search_items
            .iter()
            .map(|item| item.kind.as_str())
            .collect()
    }
}

/// One family of placeable search items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemSpec {
    /// Sprite/sound type key
    #[serde(rename = "type")]
    pub kind: String,
    /// Instances to place
    pub count: u32,
    /// Explicit positions; when present the placement algorithm is skipped
    #[serde(default)]
    pub positions: Option<Vec<Point>>,
    /// Cosmetic idle animation
    #[serde(default)]
    pub animation: Option<AnimationKind>,
    /// Draw-order override
    #[serde(default)]
    pub z_position: Option<f32>,
}

/// A non-interactive scenery sprite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub animation: AnimationKind,
    #[serde(default)]
    pub positions: Option<Vec<Point>>,
    /// Waypoints for driving/walking animations
    #[serde(default)]
    pub path: Option<Vec<Point>>,
    #[serde(default)]
    pub speed: Option<f32>,
    #[serde(default)]
    pub z_position: Option<f32>,
}

/// A scenery sprite that plays a sound when tapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveObjectSpec {
    #[serde(rename = "type")]
    pub kind: String,
    /// Sound key played on tap
    pub sound: String,
    /// Chance (0.0 - 1.0) that a tap triggers the sound
    #[serde(default = "default_probability")]
    pub probability: f64,
    #[serde(default)]
    pub positions: Option<Vec<Point>>,
}

fn default_probability() -> f64 {
    1.0
}

/// An ambient particle emitter at a fixed position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleSpec {
    #[serde(rename = "type")]
    pub kind: String,
    /// Emitter position as a compact `[x, y]` pair
    pub position: [f32; 2],
}

impl ParticleSpec {
    pub fn point(&self) -> Point {
        Point::new(self.position[0], self.position[1])
    }
}

/// An axis-aligned rectangle constraining random item placement.
///
/// Serializes as a flat `[minX, minY, maxX, maxY]` array rather than named
/// fields; decoding fails when fewer than 4 values are supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnZone {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpawnZone {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The zone as an origin + extent rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.min_x,
            self.min_y,
            self.max_x - self.min_x,
            self.max_y - self.min_y,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Sample a point uniformly inside the zone, each axis independent.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.gen_range(self.min_x..=self.max_x),
            rng.gen_range(self.min_y..=self.max_y),
        )
    }
}

impl Serialize for SpawnZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.min_x, self.min_y, self.max_x, self.max_y].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SpawnZone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f32>::deserialize(deserializer)?;
        if values.len() < 4 {
            return Err(de::Error::invalid_length(
                values.len(),
                &"4 values [minX, minY, maxX, maxY]",
            ));
        }
        Ok(SpawnZone::new(values[0], values[1], values[2], values[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_total_item_count() {
        let level = Level {
            id: "t".to_string(),
            name: "T".to_string(),
            background: "bg".to_string(),
            ambient_sound: None,
            search_items: vec![
                SearchItemSpec {
                    kind: "duck".to_string(),
                    count: 3,
                    positions: None,
                    animation: None,
                    z_position: None,
                },
                SearchItemSpec {
                    kind: "star".to_string(),
                    count: 5,
                    positions: None,
                    animation: None,
                    z_position: None,
                },
            ],
            decorations: None,
            interactive_objects: None,
            particles: None,
            spawn_zones: None,
        };

        assert_eq!(level.total_item_count(), 8);
        assert_eq!(level.item_types(), vec!["duck", "star"]);
    }

    #[test]
    fn test_spawn_zone_roundtrip() {
        let zone = SpawnZone::new(50.0, 100.0, 500.0, 600.0);
        let json = serde_json::to_string(&zone).unwrap();
        assert_eq!(json, "[50.0,100.0,500.0,600.0]");

        let decoded: SpawnZone = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, zone);
    }

    #[test]
    fn test_spawn_zone_rejects_short_array() {
        let result: Result<SpawnZone, _> = serde_json::from_str("[1.0, 2.0, 3.0]");
        assert!(result.is_err());
    }

    #[test]
    fn test_spawn_zone_random_point_in_bounds() {
        let zone = SpawnZone::new(0.0, 0.0, 100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let p = zone.random_point(&mut rng);
            assert!(p.x >= 0.0 && p.x <= 100.0);
            assert!(p.y >= 0.0 && p.y <= 100.0);
            assert!(zone.contains(p));
        }
    }

    #[test]
    fn test_spawn_zone_rect() {
        let zone = SpawnZone::new(10.0, 20.0, 110.0, 220.0);
        let rect = zone.rect();

        assert_eq!(rect.x, 10.0);
        assert_eq!(rect.y, 20.0);
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 200.0);
    }

    #[test]
    fn test_rect_random_point_in_bounds() {
        let rect = Rect::new(100.0, 50.0, 300.0, 200.0);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let p = rect.random_point(&mut rng);
            assert!(rect.contains(p));
        }
    }

    #[test]
    fn test_degenerate_rect_has_no_area() {
        assert!(!Rect::new(0.0, 0.0, 0.0, 100.0).has_area());
        assert!(!Rect::new(0.0, 0.0, 100.0, 0.0).has_area());
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).has_area());
    }

    #[test]
    fn test_animation_kind_wire_names() {
        let kind: AnimationKind = serde_json::from_str("\"bobbing\"").unwrap();
        assert_eq!(kind, AnimationKind::Bobbing);

        let kind: AnimationKind = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(kind, AnimationKind::None);
    }
}
