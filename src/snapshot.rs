//! Read-only view of the state for a renderer
//!
//! A frontend draws from a `Snapshot` instead of poking at `GameState`:
//! a flat draw list in paint order plus the numbers a HUD shows.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Color, GamePhase, GameState, Shape};

/// One primitive to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Circle { center: Vec2, radius: f32, color: Color },
    Rect { min: Vec2, size: Vec2, color: Color },
}

/// HUD numbers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hud {
    pub level: u32,
    pub experience: u32,
    pub hp: i32,
    pub game_over: bool,
    pub obstacles_left: usize,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub area: Vec2,
    pub draw_list: Vec<DrawCommand>,
    pub hud: Hud,
}

impl Snapshot {
    /// Build a snapshot. Paint order: projectiles, player, obstacles.
    /// Inactive entities are skipped.
    pub fn capture(state: &GameState) -> Self {
        let mut draw_list =
            Vec::with_capacity(1 + state.obstacles.len() + state.projectiles.len());

        for p in state.projectiles.iter().filter(|p| p.active) {
            draw_list.push(DrawCommand::Circle {
                center: p.pos,
                radius: p.radius,
                color: p.color,
            });
        }

        draw_list.push(DrawCommand::Circle {
            center: state.player.pos,
            radius: state.player.radius,
            color: state.player.color,
        });

        for o in state.obstacles.iter().filter(|o| o.active) {
            draw_list.push(match o.shape {
                Shape::Circle { radius } => DrawCommand::Circle {
                    center: o.pos,
                    radius,
                    color: o.color,
                },
                Shape::Rect { width, height } => DrawCommand::Rect {
                    min: o.pos,
                    size: Vec2::new(width, height),
                    color: o.color,
                },
            });
        }

        Self {
            tick: state.time_ticks,
            area: state.config.area(),
            draw_list,
            hud: Hud {
                level: state.player.level,
                experience: state.player.experience,
                hp: state.player.hp,
                game_over: state.phase == GamePhase::GameOver,
                obstacles_left: state.active_obstacles(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SimConfig, Variant};

    #[test]
    fn test_capture_skips_inactive() {
        let mut state = GameState::new(SimConfig::from_preset(Variant::Shooter), 5);
        state.obstacles[0].active = false;
        state.projectiles[1].active = true;

        let snap = Snapshot::capture(&state);
        // 1 projectile + player + 39 axes
        assert_eq!(snap.draw_list.len(), 41);
        assert_eq!(snap.hud.obstacles_left, 39);
        assert!(matches!(snap.draw_list[0], DrawCommand::Circle { .. }));
        assert!(matches!(snap.draw_list[2], DrawCommand::Rect { .. }));
    }

    #[test]
    fn test_player_drawn_after_projectiles() {
        let state = GameState::new(SimConfig::default(), 5);
        let snap = Snapshot::capture(&state);
        assert_eq!(
            snap.draw_list[0],
            DrawCommand::Circle {
                center: state.player.pos,
                radius: state.player.radius,
                color: Color::BLACK,
            }
        );
        assert_eq!(snap.hud.hp, 100);
        assert!(!snap.hud.game_over);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(SimConfig::from_preset(Variant::Prototype), 5);
        let json = serde_json::to_string(&Snapshot::capture(&state)).expect("serializes");
        assert!(json.contains("\"kind\":\"rect\""));
        assert!(json.contains("\"hud\""));
    }
}
