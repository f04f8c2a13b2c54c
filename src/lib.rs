//! Arena Survivor - simulation core for a dodge-and-shoot arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, entity lifecycle)
//! - `config`: Variant presets and data-driven tuning
//! - `driver`: Fixed-timestep frame driver and autopilot input
//! - `snapshot`: Read-only draw list and HUD data for a renderer
//! - `audio`: Sound cue dispatch for game events

pub mod audio;
pub mod config;
pub mod driver;
pub mod sim;
pub mod snapshot;

pub use config::{ConfigError, SimConfig, Variant};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target tick rate of the frame driver
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play area dimensions
    pub const SCREEN_WIDTH: f32 = 1800.0;
    pub const SCREEN_HEIGHT: f32 = 900.0;

    /// Player defaults (speeds are pixels per tick)
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_HP: i32 = 100;
    pub const DASH_DISTANCE: f32 = 50.0;

    /// Contact damage and the window in which only one hit lands
    pub const CONTACT_DAMAGE: i32 = 50;
    pub const CONTACT_COOLDOWN_SECS: f64 = 1.0;

    /// Leveling
    pub const EXPERIENCE_AWARD: u32 = 10;
    pub const LEVEL_THRESHOLD: u32 = 100;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_RADIUS: f32 = 10.0;

    /// Obstacle defaults
    pub const AXE_SIZE: f32 = 40.0;
    pub const ENEMY_RADIUS: f32 = 30.0;
}

/// Clamp each component of `pos` into `[min, max]`
#[inline]
pub fn clamp_to_box(pos: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(pos.x.clamp(min.x, max.x), pos.y.clamp(min.y, max.y))
}

/// Whether `pos` lies inside `[0, size]` on both axes (edges included)
#[inline]
pub fn in_play_area(pos: Vec2, size: Vec2) -> bool {
    pos.x >= 0.0 && pos.x <= size.x && pos.y >= 0.0 && pos.y <= size.y
}
