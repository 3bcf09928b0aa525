//! World builder
//!
//! Turns a decoded [`Level`] into a populated scene world. Search items are
//! either placed at their explicit positions or scattered by the placement
//! algorithm; decorations, interactive objects and particles are spawned
//! where the level says, untouched.

use hecs::World;
use rand::Rng;

use crate::level::{AnimationKind, Level, Point, Rect, SearchItemSpec};
use crate::placement::{scatter, PlacementConfig, Region};

use super::animation::AnimationController;
use super::components::{Interactive, Layer, Position, Searchable, SpriteKey};

/// World extent in world units. Matches the background art.
pub const WORLD_WIDTH: f32 = 2048.0;
pub const WORLD_HEIGHT: f32 = 1536.0;

/// Keeps randomly placed items away from the world edge.
const PLACEMENT_MARGIN: f32 = 80.0;

const DECORATION_LAYER: f32 = 0.0;
const ITEM_LAYER: f32 = 50.0;
const PARTICLE_LAYER: f32 = 60.0;

/// Builds the scene world for one level.
pub struct WorldBuilder<'a> {
    level: &'a Level,
    config: PlacementConfig,
}

impl<'a> WorldBuilder<'a> {
    pub fn new(level: &'a Level) -> Self {
        Self {
            level,
            config: PlacementConfig::default(),
        }
    }

    pub fn with_config(level: &'a Level, config: PlacementConfig) -> Self {
        Self { level, config }
    }

    /// The area random placement may use: the world minus an edge margin.
    pub fn playable_area() -> Rect {
        Rect::new(
            PLACEMENT_MARGIN,
            PLACEMENT_MARGIN,
            WORLD_WIDTH - 2.0 * PLACEMENT_MARGIN,
            WORLD_HEIGHT - 2.0 * PLACEMENT_MARGIN,
        )
    }

    /// Spawn every entity the level describes into a fresh world.
    pub fn build<R: Rng>(&self, rng: &mut R) -> World {
        let mut world = World::new();

        self.spawn_decorations(&mut world, rng);
        self.spawn_interactive_objects(&mut world, rng);
        self.spawn_particles(&mut world, rng);
        self.spawn_search_items(&mut world, rng);

        world
    }

    fn spawn_search_items<R: Rng>(&self, world: &mut World, rng: &mut R) {
        for spec in &self.level.search_items {
            let positions = self.item_positions(spec, rng);
            if (positions.len() as u32) < spec.count {
                log::warn!(
                    "Placed only {}/{} '{}' items",
                    positions.len(),
                    spec.count,
                    spec.kind
                );
            }

            let animation = spec.animation.unwrap_or(AnimationKind::Bobbing);
            let layer = spec.z_position.unwrap_or(ITEM_LAYER);
            for pos in positions {
                world.spawn((
                    Position(pos),
                    SpriteKey::new(&spec.kind),
                    Layer(layer),
                    Searchable::default(),
                    AnimationController::new(animation, rng.gen_range(0.0..1.0), 1.0),
                ));
            }
        }
    }

    /// Explicit positions win; otherwise scatter inside the spawn zones or
    /// the playable area. Never more than `count` positions, possibly fewer.
    fn item_positions<R: Rng>(&self, spec: &SearchItemSpec, rng: &mut R) -> Vec<Point> {
        if let Some(explicit) = &spec.positions {
            return explicit.iter().copied().take(spec.count as usize).collect();
        }

        let region = match self.level.spawn_zones.as_deref() {
            Some(zones) if !zones.is_empty() => Region::Zones(zones),
            _ => Region::Bounds(Self::playable_area()),
        };
        scatter(rng, spec.count, &region, &self.config)
    }

    fn spawn_decorations<R: Rng>(&self, world: &mut World, rng: &mut R) {
        let Some(decorations) = &self.level.decorations else {
            return;
        };

        for spec in decorations {
            let layer = spec.z_position.unwrap_or(DECORATION_LAYER);
            let speed = spec.speed.unwrap_or(1.0);
            for pos in spec.positions.iter().flatten() {
                world.spawn((
                    Position(*pos),
                    SpriteKey::new(&spec.kind),
                    Layer(layer),
                    AnimationController::new(spec.animation, rng.gen_range(0.0..1.0), speed),
                ));
            }
        }
    }

    fn spawn_interactive_objects<R: Rng>(&self, world: &mut World, rng: &mut R) {
        let Some(objects) = &self.level.interactive_objects else {
            return;
        };

        for spec in objects {
            for pos in spec.positions.iter().flatten() {
                world.spawn((
                    Position(*pos),
                    SpriteKey::new(&spec.kind),
                    Layer(DECORATION_LAYER),
                    Interactive {
                        sound: spec.sound.clone(),
                        probability: spec.probability,
                    },
                    AnimationController::new(
                        AnimationKind::Bobbing,
                        rng.gen_range(0.0..1.0),
                        1.0,
                    ),
                ));
            }
        }
    }

    fn spawn_particles<R: Rng>(&self, world: &mut World, rng: &mut R) {
        let Some(particles) = &self.level.particles else {
            return;
        };

        for spec in particles {
            world.spawn((
                Position(spec.point()),
                SpriteKey::new(&spec.kind),
                Layer(PARTICLE_LAYER),
                AnimationController::new(
                    AnimationKind::Flickering,
                    rng.gen_range(0.0..1.0),
                    1.0,
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{self, Point, SpawnZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn level_from(json: &str) -> Level {
        level::load_from_slice(json.as_bytes()).unwrap()
    }

    fn searchable_positions(world: &mut World) -> Vec<Point> {
        world
            .query::<(&Position, &Searchable)>()
            .iter()
            .map(|(_, (pos, _))| pos.0)
            .collect()
    }

    #[test]
    fn test_explicit_positions_used_verbatim() {
        let level = level_from(
            r#"{
                "id": "t", "name": "T", "background": "bg",
                "searchItems": [{
                    "type": "duck", "count": 2,
                    "positions": [{"x": 100, "y": 200}, {"x": 300, "y": 400}]
                }]
            }"#,
        );
        let mut rng = StdRng::seed_from_u64(1);
        let mut world = WorldBuilder::new(&level).build(&mut rng);

        let mut positions = searchable_positions(&mut world);
        positions.sort_by(|a, b| a.x.total_cmp(&b.x));

        assert_eq!(positions, vec![Point::new(100.0, 200.0), Point::new(300.0, 400.0)]);
    }

    #[test]
    fn test_short_position_list_truncates_count() {
        // count 3 but only one position: exactly one item, none synthesized
        let level = level_from(
            r#"{
                "id": "t", "name": "T", "background": "bg",
                "searchItems": [{
                    "type": "duck", "count": 3,
                    "positions": [{"x": 50, "y": 60}]
                }]
            }"#,
        );
        let mut rng = StdRng::seed_from_u64(1);
        let mut world = WorldBuilder::new(&level).build(&mut rng);

        assert_eq!(searchable_positions(&mut world), vec![Point::new(50.0, 60.0)]);
    }

    #[test]
    fn test_random_items_fill_roomy_level() {
        let level = level_from(
            r#"{
                "id": "t", "name": "T", "background": "bg",
                "searchItems": [
                    {"type": "duck", "count": 4},
                    {"type": "mushroom", "count": 6}
                ]
            }"#,
        );
        let mut rng = StdRng::seed_from_u64(8);
        let mut world = WorldBuilder::new(&level).build(&mut rng);

        let positions = searchable_positions(&mut world);
        assert_eq!(positions.len() as u32, level.total_item_count());

        let area = WorldBuilder::playable_area();
        assert!(positions.iter().all(|p| area.contains(*p)));
    }

    #[test]
    fn test_random_items_respect_spawn_zones() {
        let level = level_from(
            r#"{
                "id": "t", "name": "T", "background": "bg",
                "searchItems": [{"type": "duck", "count": 3}],
                "spawnZones": [[100, 100, 500, 500]]
            }"#,
        );
        let mut rng = StdRng::seed_from_u64(4);
        let mut world = WorldBuilder::new(&level).build(&mut rng);

        let zone = SpawnZone::new(100.0, 100.0, 500.0, 500.0);
        let positions = searchable_positions(&mut world);

        assert_eq!(positions.len(), 3);
        assert!(positions.iter().all(|p| zone.contains(*p)));
    }

    #[test]
    fn test_decorations_and_interactives_spawn() {
        let level = level_from(
            r#"{
                "id": "t", "name": "T", "background": "bg",
                "searchItems": [],
                "decorations": [{
                    "type": "tree", "animation": "swaying",
                    "positions": [{"x": 10, "y": 20}, {"x": 30, "y": 40}]
                }],
                "interactiveObjects": [{
                    "type": "pig", "sound": "oink", "probability": 0.5,
                    "positions": [{"x": 700, "y": 300}]
                }],
                "particles": [{"type": "fireflies", "position": [900, 100]}]
            }"#,
        );
        let mut rng = StdRng::seed_from_u64(2);
        let mut world = WorldBuilder::new(&level).build(&mut rng);

        assert_eq!(world.len(), 4);
        assert_eq!(world.query::<&Interactive>().iter().count(), 1);
        assert_eq!(world.query::<&Searchable>().iter().count(), 0);
    }
}
