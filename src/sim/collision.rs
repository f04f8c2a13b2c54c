//! Overlap tests between circles, points and rectangles
//!
//! Everything here is a pure predicate; the response to an overlap lives in
//! the tick.

use glam::Vec2;

use super::shape::{Rect, Shape};

/// Two circles overlap iff the distance between centers is less than the sum
/// of their radii. Touching circles do not overlap.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}

/// Circle against axis-aligned rectangle, via the closest point on the
/// rectangle to the circle's center
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}

/// Point inside rectangle, edges included
#[inline]
pub fn point_in_rect(point: Vec2, rect: &Rect) -> bool {
    rect.contains_point(point)
}

/// Player (a circle) against an obstacle anchored at `anchor`
pub fn circle_hits_obstacle(center: Vec2, radius: f32, anchor: Vec2, shape: &Shape) -> bool {
    match *shape {
        Shape::Circle { radius: r } => circles_overlap(center, radius, anchor, r),
        Shape::Rect { width, height } => {
            circle_rect_overlap(center, radius, &Rect::new(anchor, Vec2::new(width, height)))
        }
    }
}

/// Projectile against an obstacle.
///
/// Round obstacles use the projectile's radius; rectangles treat the
/// projectile as a point.
pub fn projectile_hits_obstacle(pos: Vec2, radius: f32, anchor: Vec2, shape: &Shape) -> bool {
    match *shape {
        Shape::Circle { radius: r } => circles_overlap(pos, radius, anchor, r),
        Shape::Rect { width, height } => {
            point_in_rect(pos, &Rect::new(anchor, Vec2::new(width, height)))
        }
    }
}
