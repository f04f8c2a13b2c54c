//! Game state and core simulation types
//!
//! Everything the step mutates lives here. Rosters and pools are sized once
//! from the config and never grow or shrink.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::roster;
use super::shape::Shape;
use crate::config::SimConfig;

/// RGBA color, cosmetic only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const DARKGRAY: Color = Color::rgb(80, 80, 80);
    pub const GRAY: Color = Color::rgb(130, 130, 130);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color with random channels
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// hp hit zero; only restart is accepted
    GameOver,
}

/// Things that happened during the last tick, for audio and UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectilesFired { count: usize },
    ObstacleDestroyed { index: usize },
    LevelUp { level: u32 },
    PlayerHit { hp: i32 },
    PlayerRespawned,
    GameOver,
    Restarted,
}

/// The player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Last nonzero movement direction (unnormalized input), used by dash
    pub facing: Vec2,
    pub radius: f32,
    pub color: Color,
    pub hp: i32,
    pub level: u32,
    pub experience: u32,
}

impl Player {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pos: config.spawn_point(),
            vel: Vec2::ZERO,
            facing: Vec2::ZERO,
            radius: config.player_radius,
            color: config.player_color,
            hp: config.player_hp,
            level: 1,
            experience: 0,
        }
    }

    /// Keep the whole disc inside the play area
    pub fn clamp_to(&mut self, area: Vec2) {
        let r = Vec2::splat(self.radius);
        self.pos = crate::clamp_to_box(self.pos, r, area - r);
    }

    /// Instant displacement along `direction`. Velocity is left untouched.
    pub fn dash(&mut self, direction: Vec2, distance: f32) {
        self.pos += direction.normalize_or_zero() * distance;
    }

    /// Subtract damage, clamping at zero. Returns true if the player is dead.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp = (self.hp - amount).max(0);
        self.hp == 0
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// An obstacle or enemy. Rectangles are anchored at their top-left corner,
/// circles at their center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub shape: Shape,
    pub color: Color,
    pub active: bool,
}

impl Obstacle {
    /// Move one tick, then reflect off any wall the anchor reached.
    ///
    /// No positional correction: overshoot is carried into the next tick.
    pub fn advance(&mut self, area: Vec2) {
        self.pos += self.vel;

        let (min, max) = self.shape.bounce_limits(area);
        if self.pos.x <= min.x || self.pos.x >= max.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y <= min.y || self.pos.y >= max.y {
            self.vel.y = -self.vel.y;
        }
    }
}

/// A projectile slot in the pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    pub active: bool,
}

impl Projectile {
    pub fn inactive(radius: f32, color: Color) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            color,
            active: false,
        }
    }

    /// Integrate while active; leaving the play area deactivates
    pub fn advance(&mut self, area: Vec2) {
        if !self.active {
            return;
        }
        self.pos += self.vel;
        if !crate::in_play_area(self.pos, area) {
            self.active = false;
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: SimConfig,
    pub phase: GamePhase,
    /// Simulation tick counter (playing ticks only)
    pub time_ticks: u64,
    pub player: Player,
    /// Fixed-size roster
    pub obstacles: Vec<Obstacle>,
    /// Fixed-size pool; empty when auto-fire is disabled
    pub projectiles: Vec<Projectile>,
    /// Seconds accumulated toward the next volley
    pub fire_timer: f32,
    /// Timestamp of the last contact damage, on the driver's clock
    pub last_hit_at: Option<f64>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state from a config and seed
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = roster::spawn_roster(&config, &mut rng);
        let projectiles = match &config.projectiles {
            Some(p) => vec![Projectile::inactive(p.radius, p.color); p.pool_size],
            None => Vec::new(),
        };

        Self {
            seed,
            player: Player::new(&config),
            config,
            phase: GamePhase::Playing,
            time_ticks: 0,
            obstacles,
            projectiles,
            fire_timer: 0.0,
            last_hit_at: None,
            events: Vec::new(),
            rng,
        }
    }

    /// Reinitialize player and roster, clear the pool. Counts and bounds are
    /// unchanged; the roster is re-rolled from the ongoing RNG stream.
    pub fn restart(&mut self) {
        self.player = Player::new(&self.config);
        roster::respawn_roster(&mut self.obstacles, &self.config, &mut self.rng);
        for projectile in &mut self.projectiles {
            projectile.active = false;
        }
        self.fire_timer = 0.0;
        self.last_hit_at = None;
        self.phase = GamePhase::Playing;
        log::info!("Run restarted ({} obstacles)", self.obstacles.len());
    }

    pub fn active_obstacles(&self) -> usize {
        self.obstacles.iter().filter(|o| o.active).count()
    }

    pub fn active_projectiles(&self) -> usize {
        self.projectiles.iter().filter(|p| p.active).count()
    }
}
