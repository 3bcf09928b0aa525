//! Camera and viewport projection
//!
//! World coordinates are SpriteKit-style (y grows upward); terminal rows
//! grow downward, so the projection flips the vertical axis. The camera is
//! clamped so the view never shows past the world edge, and locks to the
//! world center on an axis where the world is smaller than the view.

use crate::level::{Point, Rect};

/// World units covered by one terminal cell. Cells are roughly twice as
/// tall as wide, so the vertical scale is doubled to keep sprites square.
pub const UNITS_PER_CELL_X: f32 = 16.0;
pub const UNITS_PER_CELL_Y: f32 = 32.0;

/// The camera's center position in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point,
}

impl Camera {
    /// Start centered on the world.
    pub fn centered_on(world: Rect) -> Self {
        Self {
            position: Point::new(world.x + world.width / 2.0, world.y + world.height / 2.0),
        }
    }

    /// Move the camera by a world-unit delta, clamped to the world bounds.
    pub fn pan(&mut self, dx: f32, dy: f32, world: Rect, view: Viewport) {
        self.position.x += dx;
        self.position.y += dy;
        self.clamp(world, view);
    }

    /// Clamp so the view stays inside the world.
    pub fn clamp(&mut self, world: Rect, view: Viewport) {
        let half_w = view.world_width() / 2.0;
        let half_h = view.world_height() / 2.0;

        self.position.x = clamp_axis(self.position.x, world.x, world.x + world.width, half_w);
        self.position.y = clamp_axis(self.position.y, world.y, world.y + world.height, half_h);
    }
}

/// Clamp a camera axis; lock to center when the world is smaller than the view.
fn clamp_axis(value: f32, world_min: f32, world_max: f32, half_view: f32) -> f32 {
    let min = world_min + half_view;
    let max = world_max - half_view;
    if min > max {
        (world_min + world_max) / 2.0
    } else {
        value.clamp(min, max)
    }
}

/// The visible slice of the world, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn world_width(&self) -> f32 {
        self.cols as f32 * UNITS_PER_CELL_X
    }

    pub fn world_height(&self) -> f32 {
        self.rows as f32 * UNITS_PER_CELL_Y
    }

    /// World coordinate of the viewport's top-left corner.
    fn top_left(&self, camera: Camera) -> Point {
        Point::new(
            camera.position.x - self.world_width() / 2.0,
            camera.position.y + self.world_height() / 2.0,
        )
    }

    /// Project a world point to a cell, or None when off-screen.
    pub fn project(&self, camera: Camera, p: Point) -> Option<(u16, u16)> {
        let origin = self.top_left(camera);
        let col = (p.x - origin.x) / UNITS_PER_CELL_X;
        let row = (origin.y - p.y) / UNITS_PER_CELL_Y;

        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as u16, row as u16);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some((col, row))
    }

    /// World coordinate at the center of a cell.
    pub fn unproject(&self, camera: Camera, col: u16, row: u16) -> Point {
        let origin = self.top_left(camera);
        Point::new(
            origin.x + (col as f32 + 0.5) * UNITS_PER_CELL_X,
            origin.y - (row as f32 + 0.5) * UNITS_PER_CELL_Y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> Rect {
        Rect::new(0.0, 0.0, 2048.0, 1536.0)
    }

    #[test]
    fn test_camera_starts_centered() {
        let camera = Camera::centered_on(world());
        assert_eq!(camera.position, Point::new(1024.0, 768.0));
    }

    #[test]
    fn test_pan_is_clamped_to_world() {
        let view = Viewport::new(40, 20); // 640 x 640 world units
        let mut camera = Camera::centered_on(world());

        camera.pan(-10_000.0, -10_000.0, world(), view);
        assert_eq!(camera.position.x, 320.0);
        assert_eq!(camera.position.y, 320.0);

        camera.pan(10_000.0, 10_000.0, world(), view);
        assert_eq!(camera.position.x, 2048.0 - 320.0);
        assert_eq!(camera.position.y, 1536.0 - 320.0);
    }

    #[test]
    fn test_small_world_locks_camera() {
        let view = Viewport::new(200, 100); // larger than the world
        let mut camera = Camera::centered_on(world());

        camera.pan(500.0, 500.0, world(), view);
        assert_eq!(camera.position, Point::new(1024.0, 768.0));
    }

    #[test]
    fn test_project_unproject_roundtrip() {
        let view = Viewport::new(40, 20);
        let camera = Camera::centered_on(world());

        let p = view.unproject(camera, 13, 7);
        let cell = view.project(camera, p);
        assert_eq!(cell, Some((13, 7)));
    }

    #[test]
    fn test_offscreen_point_does_not_project() {
        let view = Viewport::new(40, 20);
        let camera = Camera::centered_on(world());

        assert_eq!(view.project(camera, Point::new(-5000.0, 0.0)), None);
        assert_eq!(view.project(camera, Point::new(0.0, 90_000.0)), None);
    }
}
