//! Coordinate conversion between screen space and scene space.
//!
//! The scene layer is drawn scaled by the zoom level about the canvas center.
//! `ContainerRect` is the *visual* rectangle of that scaled layer, so a scene
//! point maps to `rect.origin + p * zoom` and back with `(s - origin) / zoom`.

use serde::{Deserialize, Serialize};
use shared::Point2D;

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Edges are inclusive
    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// This rectangle scaled by `factor` about its own center
    pub fn scaled_about_center(&self, factor: f64) -> ScreenRect {
        let c = self.center();
        let width = self.width * factor;
        let height = self.height * factor;
        ScreenRect::new(c.x - width / 2.0, c.y - height / 2.0, width, height)
    }
}

/// Visual bounds of the scene layer as reported by the host
pub type ContainerRect = ScreenRect;

/// Convert a screen point to scene coordinates
#[inline]
pub fn screen_to_scene(screen: Point2D, container: &ContainerRect, zoom: f64) -> Point2D {
    Point2D::new(
        (screen.x - container.left) / zoom,
        (screen.y - container.top) / zoom,
    )
}

/// Convert a scene point to screen coordinates
#[inline]
pub fn scene_to_screen(scene: Point2D, container: &ContainerRect, zoom: f64) -> Point2D {
    Point2D::new(
        scene.x * zoom + container.left,
        scene.y * zoom + container.top,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let r = ScreenRect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Point2D::new(10.0, 20.0)));
        assert!(r.contains(Point2D::new(110.0, 70.0)));
        assert!(!r.contains(Point2D::new(9.9, 30.0)));
        assert!(!r.contains(Point2D::new(50.0, 70.1)));
    }

    #[test]
    fn test_scaled_about_center() {
        let r = ScreenRect::new(0.0, 0.0, 200.0, 100.0).scaled_about_center(2.0);
        assert_eq!(r, ScreenRect::new(-100.0, -50.0, 400.0, 200.0));
        assert_eq!(r.center(), Point2D::new(100.0, 50.0));
    }

    #[test]
    fn test_screen_scene_inverse() {
        let container = ScreenRect::new(40.0, 60.0, 800.0, 600.0);
        let scene = Point2D::new(12.5, 80.0);
        for zoom in [0.5, 1.0, 1.3, 2.0] {
            let back = screen_to_scene(scene_to_screen(scene, &container, zoom), &container, zoom);
            assert!((back.x - scene.x).abs() < 1e-9);
            assert!((back.y - scene.y).abs() < 1e-9);
        }
    }
}
