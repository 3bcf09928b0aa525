//! Per-entity idle animation
//!
//! Each animated sprite carries a controller advanced once per frame by the
//! game update. The controller turns elapsed time into a small positional
//! offset (or a visibility blink for flickering) that the renderer applies
//! on top of the entity's base position.

use std::f32::consts::TAU;

use crate::level::{AnimationKind, Point};

/// Drives one sprite's idle animation.
#[derive(Debug, Clone)]
pub struct AnimationController {
    pub kind: AnimationKind,
    /// Elapsed animation time in seconds
    elapsed: f32,
    /// Random start offset so sprites don't move in lockstep
    phase: f32,
    /// Speed multiplier from the level data
    speed: f32,
}

impl AnimationController {
    pub fn new(kind: AnimationKind, phase: f32, speed: f32) -> Self {
        Self {
            kind,
            elapsed: 0.0,
            phase,
            speed: if speed > 0.0 { speed } else { 1.0 },
        }
    }

    /// Advance the animation clock.
    pub fn update(&mut self, delta_seconds: f32) {
        self.elapsed += delta_seconds * self.speed;
    }

    fn cycle(&self, period: f32) -> f32 {
        ((self.elapsed + self.phase) * TAU / period).sin()
    }

    /// Current positional offset in world units.
    pub fn offset(&self) -> Point {
        match self.kind {
            AnimationKind::None | AnimationKind::Flickering => Point::default(),
            // Gentle up/down movement
            AnimationKind::Bobbing => Point::new(0.0, 2.0 * self.cycle(3.0)),
            AnimationKind::Floating => Point::new(0.5 * self.cycle(2.0), 3.0 * self.cycle(4.5)),
            // Side-to-side movement
            AnimationKind::Swaying => Point::new(2.0 * self.cycle(4.0), 0.0),
            AnimationKind::Flowing => Point::new(4.0 * self.cycle(6.0), 0.0),
            AnimationKind::Drifting => {
                Point::new(30.0 * self.cycle(16.0), 5.0 * self.cycle(8.0))
            }
            // Back-and-forth patrols
            AnimationKind::Walking => Point::new(30.0 * self.cycle(5.0), 0.0),
            AnimationKind::Driving => Point::new(60.0 * self.cycle(8.0), 0.0),
        }
    }

    /// Whether the sprite is visible this frame (flickering blinks off).
    pub fn visible(&self) -> bool {
        match self.kind {
            AnimationKind::Flickering => self.cycle(0.8) > -0.6,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_has_no_offset() {
        let mut anim = AnimationController::new(AnimationKind::None, 0.3, 1.0);
        anim.update(1.7);
        assert_eq!(anim.offset(), Point::default());
        assert!(anim.visible());
    }

    #[test]
    fn test_bobbing_stays_in_amplitude() {
        let mut anim = AnimationController::new(AnimationKind::Bobbing, 0.5, 1.0);
        for _ in 0..200 {
            anim.update(0.05);
            let off = anim.offset();
            assert_eq!(off.x, 0.0);
            assert!(off.y.abs() <= 2.0 + f32::EPSILON);
        }
    }

    #[test]
    fn test_zero_speed_falls_back_to_unit() {
        let mut anim = AnimationController::new(AnimationKind::Walking, 0.0, 0.0);
        anim.update(1.0);
        // With a zero multiplier the clock would never move
        assert!(anim.elapsed > 0.0);
    }

    #[test]
    fn test_flicker_blinks() {
        let mut anim = AnimationController::new(AnimationKind::Flickering, 0.0, 1.0);
        let mut seen_off = false;
        for _ in 0..100 {
            anim.update(0.02);
            if !anim.visible() {
                seen_off = true;
            }
        }
        assert!(seen_off);
    }
}
