//! Item placement
//!
//! Scatters item positions inside an allowed region so same-sized sprites
//! never visually overlap. Uses bounded rejection sampling: candidates too
//! close to an already-accepted point are discarded, and when the quota
//! cannot be met the separation constraint is relaxed step by step down to
//! a floor. Under-filling is the only failure mode; the caller spawns
//! however many positions come back.

use rand::Rng;

use crate::level::{Point, Rect, SpawnZone};

/// Tuning for the scatter algorithm.
///
/// The defaults were chosen for roughly 2000x1500 worlds with ~20 items of
/// 64-unit sprites; denser levels should supply their own values.
#[derive(Debug, Clone, Copy)]
pub struct PlacementConfig {
    /// Separation the algorithm starts with
    pub initial_separation: f32,
    /// Relaxation stops once the separation would drop below this
    pub min_separation: f32,
    /// How much the separation shrinks per relaxation pass
    pub relax_step: f32,
    /// Candidate draws per requested item, per pass
    pub attempts_per_item: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            initial_separation: 74.0,
            min_separation: 54.0,
            relax_step: 6.0,
            attempts_per_item: 300,
        }
    }
}

/// Where scattered points may land.
#[derive(Debug, Clone)]
pub enum Region<'a> {
    /// Uniform over a single rectangle
    Bounds(Rect),
    /// Uniform over a zone, then uniform within it
    Zones(&'a [SpawnZone]),
}

impl Region<'_> {
    /// Whether any point can be sampled at all.
    fn is_sampleable(&self) -> bool {
        match self {
            Region::Bounds(rect) => rect.has_area(),
            Region::Zones(zones) => zones.iter().any(|z| z.rect().has_area()),
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        match self {
            Region::Bounds(rect) => rect.random_point(rng),
            Region::Zones(zones) => {
                let zone = &zones[rng.gen_range(0..zones.len())];
                zone.random_point(rng)
            }
        }
    }

    /// Whether a point lies inside the region.
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Region::Bounds(rect) => rect.contains(p),
            Region::Zones(zones) => zones.iter().any(|z| z.contains(p)),
        }
    }
}

/// Scatter up to `count` positions inside `region`, keeping every pair at
/// least the effective separation apart.
///
/// Returns fewer than `count` points when even the floor separation cannot
/// fit the region; that shortfall is silent and the result is never an error.
pub fn scatter<R: Rng>(
    rng: &mut R,
    count: u32,
    region: &Region,
    config: &PlacementConfig,
) -> Vec<Point> {
    if count == 0 || !region.is_sampleable() {
        return Vec::new();
    }

    let target = count as usize;
    let max_attempts = target.saturating_mul(config.attempts_per_item as usize);
    let mut placed: Vec<Point> = Vec::with_capacity(target);
    let mut separation = config.initial_separation;

    while placed.len() < target && separation >= config.min_separation {
        let separation_sq = separation * separation;
        let mut attempts = 0usize;

        while placed.len() < target && attempts < max_attempts {
            attempts += 1;
            let candidate = region.sample(rng);

            let too_close = placed
                .iter()
                .any(|p| candidate.distance_sq(p) < separation_sq);
            if !too_close {
                placed.push(candidate);
            }
        }

        if placed.len() < target {
            separation -= config.relax_step;
            log::debug!(
                "Placement pass fell short ({}/{}), relaxing separation to {:.0}",
                placed.len(),
                target,
                separation
            );
        }
    }

    placed
}
