//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in through `tick` arguments only
//! - Seeded RNG only
//! - Stable iteration order (roster and pool slot order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod roster;
pub mod shape;
pub mod state;
pub mod tick;

pub use collision::{
    circle_hits_obstacle, circle_rect_overlap, circles_overlap, point_in_rect,
    projectile_hits_obstacle,
};
pub use roster::{DIRECTIONS, fire_volley, slot_velocity};
pub use shape::{Rect, Shape};
pub use state::{Color, GameEvent, GamePhase, GameState, Obstacle, Player, Projectile};
pub use tick::{TickInput, level_up_due, tick};
