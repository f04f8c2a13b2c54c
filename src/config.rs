//! Simulation configuration and variant presets
//!
//! Every game variant runs on the same core; a `SimConfig` picks entity
//! counts, obstacle shape, contact policy and which optional mechanics
//! (projectiles, dash) are enabled. Configs can be loaded from JSON.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Color, Shape};

/// Built-in game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// A few bouncing axes, touch one and you start over
    Prototype,
    /// Forty axes and a four-way auto-fire
    Shooter,
    /// Round enemies, eight-way auto-fire, dash, hp and game over
    #[default]
    Survivor,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Prototype, Variant::Shooter, Variant::Survivor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Prototype => "prototype",
            Variant::Shooter => "shooter",
            Variant::Survivor => "survivor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "prototype" | "proto" => Some(Variant::Prototype),
            "shooter" | "axes" => Some(Variant::Shooter),
            "survivor" => Some(Variant::Survivor),
            _ => None,
        }
    }
}

/// What happens when the player touches an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ContactPolicy {
    /// Lose `amount` hp, at most once per `cooldown_secs`
    Damage { amount: i32, cooldown_secs: f64 },
    /// Teleport back to the spawn point
    Respawn,
}

/// When accumulated experience converts into a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LevelUpRule {
    /// Only when experience lands exactly on the threshold
    #[default]
    Exact,
    /// Whenever experience is at or above the threshold
    AtLeast,
}

/// Obstacle coloring at spawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleColor {
    Fixed(Color),
    Random,
}

/// Obstacle roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Number of slots, fixed for the lifetime of the state
    pub count: usize,
    pub shape: Shape,
    /// Velocity components are rolled as integers in `[-max_speed, max_speed]`
    pub max_speed: i32,
    pub color: ObstacleColor,
}

/// Projectile pool and auto-fire timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileConfig {
    pub pool_size: usize,
    pub speed: f32,
    pub radius: f32,
    /// Seconds between volleys
    pub interval_secs: f32,
    pub color: Color,
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub variant: Variant,
    pub width: f32,
    pub height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Pixels per tick
    pub player_speed: f32,
    pub player_hp: i32,
    pub player_color: Color,
    /// Dash distance, `None` disables dashing
    pub dash_distance: Option<f32>,

    // === Entities ===
    pub roster: RosterConfig,
    /// `None` disables auto-fire entirely
    pub projectiles: Option<ProjectileConfig>,

    // === Progression ===
    pub experience_award: u32,
    pub level_threshold: u32,
    pub level_up_rule: LevelUpRule,
    pub contact: ContactPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::from_preset(Variant::default())
    }
}

impl SimConfig {
    /// Build the configuration of a built-in variant
    pub fn from_preset(variant: Variant) -> Self {
        let axes = RosterConfig {
            count: 40,
            shape: Shape::Rect {
                width: AXE_SIZE,
                height: AXE_SIZE,
            },
            max_speed: 3,
            color: ObstacleColor::Fixed(Color::RED),
        };

        let base = Self {
            variant,
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_hp: PLAYER_START_HP,
            player_color: Color::BLACK,
            dash_distance: None,
            roster: axes,
            projectiles: None,
            experience_award: EXPERIENCE_AWARD,
            level_threshold: LEVEL_THRESHOLD,
            level_up_rule: LevelUpRule::Exact,
            contact: ContactPolicy::Respawn,
        };

        match variant {
            Variant::Prototype => Self {
                roster: RosterConfig {
                    count: 4,
                    ..base.roster.clone()
                },
                ..base
            },
            Variant::Shooter => Self {
                projectiles: Some(ProjectileConfig {
                    pool_size: 4,
                    speed: PROJECTILE_SPEED,
                    radius: PROJECTILE_RADIUS,
                    interval_secs: 0.8,
                    color: Color::DARKGRAY,
                }),
                ..base
            },
            Variant::Survivor => Self {
                dash_distance: Some(DASH_DISTANCE),
                roster: RosterConfig {
                    count: 30,
                    shape: Shape::Circle {
                        radius: ENEMY_RADIUS,
                    },
                    max_speed: 4,
                    color: ObstacleColor::Random,
                },
                projectiles: Some(ProjectileConfig {
                    pool_size: 8,
                    speed: PROJECTILE_SPEED,
                    radius: PROJECTILE_RADIUS,
                    interval_secs: 0.7,
                    color: Color::DARKGRAY,
                }),
                contact: ContactPolicy::Damage {
                    amount: CONTACT_DAMAGE,
                    cooldown_secs: CONTACT_COOLDOWN_SECS,
                },
                ..base
            },
        }
    }

    /// Play area size
    #[inline]
    pub fn area(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Where the player starts and respawns (center of the play area)
    #[inline]
    pub fn spawn_point(&self) -> Vec2 {
        self.area() / 2.0
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0 {
            return invalid("play area must have positive, finite dimensions");
        }
        if self.player_radius <= 0.0 || self.player_radius * 2.0 > self.width.min(self.height) {
            return invalid("player radius must be positive and fit in the play area");
        }
        if self.player_speed < 0.0 {
            return invalid("player speed must not be negative");
        }
        if self.player_hp <= 0 {
            return invalid("player hp must be positive");
        }
        if self.dash_distance.is_some_and(|d| d < 0.0) {
            return invalid("dash distance must not be negative");
        }
        if self.roster.max_speed < 0 {
            return invalid("roster max speed must not be negative");
        }
        let sizes_positive = match self.roster.shape {
            Shape::Circle { radius } => radius > 0.0,
            Shape::Rect { width, height } => width > 0.0 && height > 0.0,
        };
        if !sizes_positive || !self.roster.shape.fits(self.area()) {
            return invalid("obstacle shape must be positive and fit in the play area");
        }
        if let Some(p) = &self.projectiles {
            if p.pool_size == 0 {
                return invalid("projectile pool must have at least one slot");
            }
            if p.interval_secs <= 0.0 || p.speed <= 0.0 || p.radius < 0.0 {
                return invalid("projectile interval and speed must be positive");
            }
        }
        if self.level_threshold == 0 {
            return invalid("level threshold must be positive");
        }
        if let ContactPolicy::Damage {
            amount,
            cooldown_secs,
        } = self.contact
        {
            if amount <= 0 || cooldown_secs < 0.0 {
                return invalid("contact damage must be positive with a non-negative cooldown");
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    ///
    /// Top-level fields override the preset named by `"variant"` (survivor if
    /// absent); nested tables such as `roster` are replaced whole.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let variant = match overrides.get("variant") {
            Some(v) => serde_json::from_value(v.clone())?,
            None => Variant::default(),
        };

        let mut merged = serde_json::to_value(Self::from_preset(variant))?;
        if let (Some(base), Some(fields)) = (merged.as_object_mut(), overrides.as_object()) {
            for (key, value) in fields {
                base.insert(key.clone(), value.clone());
            }
        }

        let config: SimConfig = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded {} config from {}", config.variant.as_str(), path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Failure to produce a usable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for variant in Variant::ALL {
            let config = SimConfig::from_preset(variant);
            assert!(config.validate().is_ok(), "{} preset invalid", variant.as_str());
            assert_eq!(config.variant, variant);
        }
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(Variant::from_str("Shooter"), Some(Variant::Shooter));
        assert_eq!(Variant::from_str("proto"), Some(Variant::Prototype));
        assert_eq!(Variant::from_str("SURVIVOR"), Some(Variant::Survivor));
        assert_eq!(Variant::from_str("tetris"), None);
        for variant in Variant::ALL {
            assert_eq!(Variant::from_str(variant.as_str()), Some(variant));
        }
    }

    #[test]
    fn test_survivor_preset_matches_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.variant, Variant::Survivor);
        assert_eq!(config.roster.count, 30);
        assert_eq!(config.projectiles.as_ref().map(|p| p.pool_size), Some(8));
        assert_eq!(config.dash_distance, Some(DASH_DISTANCE));
        assert!(matches!(config.contact, ContactPolicy::Damage { amount: 50, .. }));
    }

    #[test]
    fn test_shooter_preset() {
        let config = SimConfig::from_preset(Variant::Shooter);
        assert_eq!(config.roster.count, 40);
        assert!(matches!(config.roster.shape, Shape::Rect { .. }));
        assert_eq!(config.projectiles.as_ref().map(|p| p.pool_size), Some(4));
        assert_eq!(config.contact, ContactPolicy::Respawn);
        assert!(config.dash_distance.is_none());
    }

    #[test]
    fn test_prototype_has_no_projectiles() {
        let config = SimConfig::from_preset(Variant::Prototype);
        assert!(config.projectiles.is_none());
        assert_eq!(config.roster.count, 4);
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = SimConfig::from_json(r#"{ "player_speed": 7.5, "level_up_rule": "at_least" }"#)
            .expect("valid json");
        assert_eq!(config.player_speed, 7.5);
        assert_eq!(config.level_up_rule, LevelUpRule::AtLeast);
        assert_eq!(config.roster.count, 30);
    }

    #[test]
    fn test_from_json_layers_on_named_variant() {
        let config = SimConfig::from_json(r#"{ "variant": "shooter", "experience_award": 25 }"#)
            .expect("valid json");
        assert_eq!(config.variant, Variant::Shooter);
        assert_eq!(config.roster.count, 40);
        assert_eq!(config.experience_award, 25);
        assert_eq!(config.contact, ContactPolicy::Respawn);
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let err = SimConfig::from_json(r#"{ "level_threshold": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_json_roundtrip_preset() {
        let config = SimConfig::from_preset(Variant::Shooter);
        let json = config.to_json().expect("serializes");
        let parsed = SimConfig::from_json(&json).expect("parses");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = SimConfig::from_json("{ nope").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config: "));
        assert!(std::error::Error::source(&err).is_some());
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_error_message() {
        let err = SimConfig::from_json(r#"{ "player_hp": 0 }"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid config: player hp must be positive");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let mut config = SimConfig::default();
        if let Some(p) = config.projectiles.as_mut() {
            p.pool_size = 0;
        }
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_player() {
        let config = SimConfig {
            player_radius: 500.0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("failed to read config"));
    }
}
