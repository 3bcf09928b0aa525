//! Game state machine
//!
//! Owns the current level, the scene world, the camera and the per-type
//! found counters, and resolves taps against the scene.

use std::time::{Duration, Instant};

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::audio::{AudioManager, SoundId};
use crate::level::{self, Level, Point, Rect};
use crate::render::Camera;
use crate::scene::{
    AnimationController, Interactive, Layer, Position, Searchable, SpriteKey, WorldBuilder,
    WORLD_HEIGHT, WORLD_WIDTH,
};

/// Bundled levels in play order.
pub const LEVEL_ORDER: &[&str] = &["meadow", "forest_evening"];

/// Half-extent of the tap hit box around a sprite, in world units.
/// Sprites are 48 units; a little slack keeps taps forgiving.
const TAP_RADIUS: f32 = 32.0;

/// All possible game states
#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    /// Panning and tapping
    Playing,
    /// All items found
    Victory { elapsed: Duration },
    /// Exit the game
    Quit,
}

/// Found/total for one item family, in HUD order.
#[derive(Debug, Clone)]
pub struct TypeCounter {
    pub kind: String,
    pub found: u32,
    /// Instances actually spawned; reflects any placement shortfall
    pub total: u32,
}

/// What a tap hit, for the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome {
    /// A search item was found
    Found { kind: String },
    /// The last search item was found
    Won,
    /// An interactive object reacted
    Interacted,
    /// Nothing there
    Miss,
}

/// The main game struct that holds all game data
pub struct Game {
    /// Current game state
    state: GameState,
    /// The active level descriptor
    level: Level,
    /// Scene entities
    world: World,
    /// Random number generator (seeded for reproducibility)
    rng: StdRng,
    /// Camera center in world units
    camera: Camera,
    /// Per-type found counters, in `search_items` order
    counters: Vec<TypeCounter>,
    /// Index into [`LEVEL_ORDER`]
    level_index: usize,
    /// When the current level started
    level_start: Instant,
    /// Audio manager for sound effects
    audio: AudioManager,
}

impl Game {
    /// Create a game on the first level.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a game with a fixed RNG seed (reproducible placement).
    pub fn with_seed(seed: u64) -> Self {
        let mut game = Self {
            state: GameState::Playing,
            level: level::loader::fallback_level(),
            world: World::new(),
            rng: StdRng::seed_from_u64(seed),
            camera: Camera::centered_on(Self::world_bounds()),
            counters: Vec::new(),
            level_index: 0,
            level_start: Instant::now(),
            audio: AudioManager::new(),
        };
        game.load_level_at(0);
        game
    }

    /// Full world extent.
    pub fn world_bounds() -> Rect {
        Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT)
    }

    fn load_level_at(&mut self, index: usize) {
        let id = LEVEL_ORDER[index % LEVEL_ORDER.len()];
        self.level = level::load_or_fallback(id);
        self.world = WorldBuilder::new(&self.level).build(&mut self.rng);
        self.counters = self.count_spawned();
        self.level_index = index;
        self.level_start = Instant::now();
        self.state = GameState::Playing;
        self.camera = Camera::centered_on(Self::world_bounds());

        self.audio.play(SoundId::LevelStart);
        if let Some(key) = self.level.ambient_sound.clone() {
            self.audio.play_key(&key);
        }
    }

    /// Build counters from what was actually spawned, keeping HUD order.
    /// Totals can be below the level's requested counts when placement
    /// falls short; the HUD denominator follows the spawned count.
    fn count_spawned(&mut self) -> Vec<TypeCounter> {
        let mut counters: Vec<TypeCounter> = self
            .level
            .search_items
            .iter()
            .map(|spec| TypeCounter {
                kind: spec.kind.clone(),
                found: 0,
                total: 0,
            })
            .collect();

        for (_, (key, _)) in self.world.query::<(&SpriteKey, &Searchable)>().iter() {
            if let Some(counter) = counters.iter_mut().find(|c| c.kind == key.0) {
                counter.total += 1;
            }
        }

        counters.retain(|c| c.total > 0);
        counters
    }

    // === Accessors ===

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn counters(&self) -> &[TypeCounter] {
        &self.counters
    }

    pub fn found_count(&self) -> u32 {
        self.counters.iter().map(|c| c.found).sum()
    }

    pub fn total_count(&self) -> u32 {
        self.counters.iter().map(|c| c.total).sum()
    }

    /// Time since the current level started, frozen at victory.
    pub fn elapsed(&self) -> Duration {
        match &self.state {
            GameState::Victory { elapsed } => *elapsed,
            _ => self.level_start.elapsed(),
        }
    }

    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 >= LEVEL_ORDER.len()
    }

    // === Updates ===

    /// Advance all animation controllers by one frame.
    pub fn update(&mut self, delta: Duration) {
        let delta_seconds = delta.as_secs_f32();
        for (_, anim) in self.world.query_mut::<&mut AnimationController>() {
            anim.update(delta_seconds);
        }
    }

    /// Resolve a tap at a world point.
    pub fn tap(&mut self, point: Point) -> TapOutcome {
        if self.state != GameState::Playing {
            return TapOutcome::Miss;
        }

        if let Some(entity) = self.hit_searchable(point) {
            return self.found_item(entity);
        }

        if let Some((sound, probability)) = self.hit_interactive(point) {
            if self.rng.gen_bool(probability.clamp(0.0, 1.0)) {
                self.audio.play_key(&sound);
            }
            return TapOutcome::Interacted;
        }

        TapOutcome::Miss
    }

    /// Topmost unfound searchable whose hit box contains the point.
    fn hit_searchable(&self, point: Point) -> Option<Entity> {
        let mut best: Option<(Entity, f32)> = None;

        for (entity, (pos, anim, layer, searchable)) in self
            .world
            .query::<(&Position, &AnimationController, &Layer, &Searchable)>()
            .iter()
        {
            if searchable.found {
                continue;
            }
            let offset = anim.offset();
            let at = Point::new(pos.0.x + offset.x, pos.0.y + offset.y);
            if (point.x - at.x).abs() > TAP_RADIUS || (point.y - at.y).abs() > TAP_RADIUS {
                continue;
            }
            if best.map_or(true, |(_, top)| layer.0 >= top) {
                best = Some((entity, layer.0));
            }
        }

        best.map(|(entity, _)| entity)
    }

    fn hit_interactive(&self, point: Point) -> Option<(String, f64)> {
        for (_, (pos, interactive)) in self.world.query::<(&Position, &Interactive)>().iter() {
            if (point.x - pos.0.x).abs() <= TAP_RADIUS && (point.y - pos.0.y).abs() <= TAP_RADIUS {
                return Some((interactive.sound.clone(), interactive.probability));
            }
        }
        None
    }

    fn found_item(&mut self, entity: Entity) -> TapOutcome {
        let kind = match self.world.get::<&SpriteKey>(entity) {
            Ok(key) => key.0.clone(),
            Err(_) => return TapOutcome::Miss,
        };

        if let Ok(mut searchable) = self.world.get::<&mut Searchable>(entity) {
            searchable.found = true;
        }
        if let Some(counter) = self.counters.iter_mut().find(|c| c.kind == kind) {
            counter.found += 1;
        }

        log::info!(
            "Found '{}' ({}/{})",
            kind,
            self.found_count(),
            self.total_count()
        );
        self.audio.play(SoundId::ItemFound);

        if self.total_count() > 0 && self.found_count() >= self.total_count() {
            let elapsed = self.level_start.elapsed();
            log::info!("Level '{}' complete in {:?}", self.level.id, elapsed);
            self.state = GameState::Victory { elapsed };
            self.audio.play(SoundId::Victory);
            return TapOutcome::Won;
        }

        TapOutcome::Found { kind }
    }

    // === Transitions ===

    /// Advance to the next bundled level (wraps on the last).
    pub fn next_level(&mut self) {
        self.audio.play(SoundId::MenuSelect);
        let next = (self.level_index + 1) % LEVEL_ORDER.len();
        self.load_level_at(next);
    }

    /// Back to the first level.
    pub fn restart(&mut self) {
        self.audio.play(SoundId::MenuSelect);
        self.load_level_at(0);
    }

    pub fn quit(&mut self) {
        self.state = GameState::Quit;
    }

    /// Mute/unmute sound effects.
    pub fn toggle_audio(&mut self) {
        let enabled = !self.audio.is_enabled();
        self.audio.set_enabled(enabled);
        log::info!("Audio {}", if enabled { "enabled" } else { "muted" });
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
