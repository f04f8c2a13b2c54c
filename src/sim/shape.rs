//! Obstacle shapes
//!
//! Obstacles are either circles (positioned by center) or axis-aligned
//! rectangles (positioned by top-left corner). Sizes never change after spawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Shape of an obstacle, independent of its position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

impl Shape {
    /// Range of positions the anchor may occupy before it bounces off a wall.
    ///
    /// Circles keep their whole disc inside the area; rectangles keep their
    /// far edge inside.
    pub fn bounce_limits(&self, area: Vec2) -> (Vec2, Vec2) {
        match *self {
            Shape::Circle { radius } => (Vec2::splat(radius), area - Vec2::splat(radius)),
            Shape::Rect { width, height } => (Vec2::ZERO, area - Vec2::new(width, height)),
        }
    }

    /// Whole-pixel anchor positions a fresh obstacle may spawn on: one pixel
    /// in from each bounce limit. Empty when `lo > hi` on either axis.
    pub fn spawn_range(&self, area: Vec2) -> (Vec2, Vec2) {
        let (min, max) = self.bounce_limits(area);
        (min.ceil() + Vec2::ONE, max.floor() - Vec2::ONE)
    }

    /// Whether an obstacle of this shape has at least one spawn position
    pub fn fits(&self, area: Vec2) -> bool {
        let (lo, hi) = self.spawn_range(area);
        lo.x <= hi.x && lo.y <= hi.y
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Point containment, edges included
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }

    /// Closest point on (or in) the rectangle to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        crate::clamp_to_box(point, self.min, self.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_bounce_limits() {
        let shape = Shape::Circle { radius: 30.0 };
        let (min, max) = shape.bounce_limits(Vec2::new(1800.0, 900.0));
        assert_eq!(min, Vec2::new(30.0, 30.0));
        assert_eq!(max, Vec2::new(1770.0, 870.0));
    }

    #[test]
    fn test_rect_bounce_limits() {
        let shape = Shape::Rect { width: 40.0, height: 20.0 };
        let (min, max) = shape.bounce_limits(Vec2::new(1800.0, 900.0));
        assert_eq!(min, Vec2::ZERO);
        assert_eq!(max, Vec2::new(1760.0, 880.0));
    }

    #[test]
    fn test_shape_fits() {
        let area = Vec2::new(100.0, 100.0);
        assert!(Shape::Circle { radius: 10.0 }.fits(area));
        assert!(!Shape::Circle { radius: 50.0 }.fits(area));
        assert!(!Shape::Rect { width: 99.0, height: 10.0 }.fits(area));
    }

    #[test]
    fn test_fits_needs_whole_pixel_room() {
        // Limits 10.6..12.8 are more than two pixels apart but hold no
        // integer one pixel in from either side
        let shape = Shape::Circle { radius: 10.6 };
        assert!(!shape.fits(Vec2::new(23.4, 100.0)));

        // Limits 10.5..13.5: only x = 12 is left
        let shape = Shape::Circle { radius: 10.5 };
        let area = Vec2::new(24.0, 100.0);
        assert!(shape.fits(area));
        let (lo, hi) = shape.spawn_range(area);
        assert_eq!((lo.x, hi.x), (12.0, 12.0));
    }

    #[test]
    fn test_rect_contains_point_inclusive() {
        let rect = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(40.0, 40.0));
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(rect.contains_point(Vec2::new(50.0, 50.0)));
        assert!(rect.contains_point(Vec2::new(30.0, 20.0)));
        assert!(!rect.contains_point(Vec2::new(50.1, 30.0)));
        assert!(!rect.contains_point(Vec2::new(30.0, 9.9)));
    }

    #[test]
    fn test_rect_closest_point() {
        let rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert_eq!(rect.closest_point(Vec2::new(5.0, 5.0)), Vec2::new(5.0, 5.0));
        assert_eq!(rect.closest_point(Vec2::new(-5.0, 5.0)), Vec2::new(0.0, 5.0));
        assert_eq!(rect.closest_point(Vec2::new(20.0, 30.0)), Vec2::new(10.0, 10.0));
    }
}
