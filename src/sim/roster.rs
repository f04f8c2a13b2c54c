//! Spawn and reset bookkeeping for the obstacle roster and projectile pool

use glam::Vec2;
use rand::Rng;

use super::state::{Color, Obstacle, Projectile};
use crate::config::{ObstacleColor, SimConfig};

/// Volley directions, indexed by pool slot (wrapping for pools over 8).
/// Diagonals are unnormalized, so they travel faster than the axes.
pub const DIRECTIONS: [Vec2; 8] = [
    Vec2::new(0.0, -1.0),  // up
    Vec2::new(0.0, 1.0),   // down
    Vec2::new(-1.0, 0.0),  // left
    Vec2::new(1.0, 0.0),   // right
    Vec2::new(1.0, -1.0),  // up-right
    Vec2::new(1.0, 1.0),   // down-right
    Vec2::new(-1.0, -1.0), // up-left
    Vec2::new(-1.0, 1.0),  // down-left
];

/// Velocity assigned to `slot` on every volley
#[inline]
pub fn slot_velocity(slot: usize, speed: f32) -> Vec2 {
    DIRECTIONS[slot % DIRECTIONS.len()] * speed
}

/// Roll one obstacle strictly inside its bounce limits
fn roll_obstacle(config: &SimConfig, rng: &mut impl Rng) -> Obstacle {
    let roster = &config.roster;
    // Never starts on a wall; validation guarantees the range is non-empty
    let (lo, hi) = roster.shape.spawn_range(config.area());
    let pos = Vec2::new(
        rng.random_range(lo.x as i32..=hi.x as i32) as f32,
        rng.random_range(lo.y as i32..=hi.y as i32) as f32,
    );

    let speed = roster.max_speed;
    let vel = Vec2::new(
        rng.random_range(-speed..=speed) as f32,
        rng.random_range(-speed..=speed) as f32,
    );

    let color = match roster.color {
        ObstacleColor::Fixed(color) => color,
        ObstacleColor::Random => Color::random(rng),
    };

    Obstacle {
        pos,
        vel,
        shape: roster.shape,
        color,
        active: true,
    }
}

/// Build the initial roster
pub fn spawn_roster(config: &SimConfig, rng: &mut impl Rng) -> Vec<Obstacle> {
    (0..config.roster.count)
        .map(|_| roll_obstacle(config, rng))
        .collect()
}

/// Re-roll every slot in place. The slot count never changes.
pub fn respawn_roster(obstacles: &mut [Obstacle], config: &SimConfig, rng: &mut impl Rng) {
    for slot in obstacles.iter_mut() {
        *slot = roll_obstacle(config, rng);
    }
}

/// Fire the whole pool from `origin` at once, overwriting every slot
/// regardless of whether it was still in flight.
pub fn fire_volley(pool: &mut [Projectile], origin: Vec2, speed: f32) {
    for (slot, projectile) in pool.iter_mut().enumerate() {
        projectile.pos = origin;
        projectile.vel = slot_velocity(slot, speed);
        projectile.active = true;
    }
}
