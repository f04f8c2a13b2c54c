//! Per-frame simulation step
//!
//! One call advances the world by one tick: auto-fire, integration, then
//! collision response. The driver supplies the frame time and a monotonic
//! timestamp; the step does no timing of its own.

use glam::Vec2;

use super::collision::{circle_hits_obstacle, projectile_hits_obstacle};
use super::roster::fire_volley;
use super::state::{GameEvent, GamePhase, GameState, Obstacle, Player};
use crate::config::{ContactPolicy, LevelUpRule, SimConfig};

/// Input for a single tick. Directions are "held"; dash and restart are
/// "just pressed" and must only be set for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub dash: bool,
    pub restart: bool,
}

impl TickInput {
    /// Raw direction from held keys (screen coordinates, y grows downward)
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.right {
            dir.x += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.up {
            dir.y -= 1.0;
        }
        dir
    }

    /// Clear the one-shot actions after they have been consumed
    pub fn clear_one_shots(&mut self) {
        self.dash = false;
        self.restart = false;
    }
}

/// Advance the game state by one tick.
///
/// `dt` is the seconds elapsed since the previous tick (drives auto-fire),
/// `now` a monotonic timestamp in seconds (drives the contact cooldown).
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now: f64) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
            state.events.push(GameEvent::Restarted);
            return;
        }
        // The world keeps drifting behind the game over screen
        let area = state.config.area();
        for obstacle in state.obstacles.iter_mut().filter(|o| o.active) {
            obstacle.advance(area);
        }
        return;
    }

    state.time_ticks += 1;
    let area = state.config.area();

    for projectile in &mut state.projectiles {
        projectile.advance(area);
    }

    // Auto-fire: the whole pool in lockstep. A fresh volley is tested where
    // it spawns and starts moving next tick.
    if let Some(cfg) = &state.config.projectiles {
        state.fire_timer += dt;
        if state.fire_timer >= cfg.interval_secs {
            fire_volley(&mut state.projectiles, state.player.pos, cfg.speed);
            state.fire_timer = 0.0;
            state.events.push(GameEvent::ProjectilesFired {
                count: state.projectiles.len(),
            });
        }
    }

    move_player(&mut state.player, input, &state.config);

    for obstacle in state.obstacles.iter_mut().filter(|o| o.active) {
        obstacle.advance(area);
    }

    resolve_projectile_hits(state);
    resolve_player_contact(state, now);
}

/// Directional movement, optional dash, then clamp to the play area
fn move_player(player: &mut Player, input: &TickInput, config: &SimConfig) {
    let dir = input.direction();
    if dir != Vec2::ZERO {
        player.facing = dir;
    }

    if input.dash {
        if let Some(distance) = config.dash_distance {
            player.dash(player.facing, distance);
        }
    }

    player.vel = dir.normalize_or_zero() * config.player_speed;
    player.pos += player.vel;
    player.clamp_to(config.area());
}

/// Projectiles against the roster. A projectile is spent on its first hit.
/// Kills after the tick's level-up award nothing, so no excess carries over.
fn resolve_projectile_hits(state: &mut GameState) {
    let GameState {
        config,
        player,
        obstacles,
        projectiles,
        events,
        ..
    } = state;

    let mut leveled = false;
    for projectile in projectiles.iter_mut().filter(|p| p.active) {
        let hit = obstacles.iter_mut().enumerate().find(|(_, o)| {
            o.active && projectile_hits_obstacle(projectile.pos, projectile.radius, o.pos, &o.shape)
        });
        let Some((index, obstacle)) = hit else {
            continue;
        };

        projectile.active = false;
        obstacle.active = false;
        events.push(GameEvent::ObstacleDestroyed { index });

        if leveled {
            continue;
        }
        player.experience += config.experience_award;
        if level_up_due(player.experience, config.level_threshold, config.level_up_rule) {
            leveled = true;
            player.level += 1;
            player.experience = 0;
            log::debug!("Level up -> {}", player.level);
            events.push(GameEvent::LevelUp {
                level: player.level,
            });
        }
    }
}

/// Whether `experience` converts into a level under `rule`
pub fn level_up_due(experience: u32, threshold: u32, rule: LevelUpRule) -> bool {
    match rule {
        LevelUpRule::Exact => experience == threshold,
        LevelUpRule::AtLeast => experience >= threshold,
    }
}

/// First active obstacle overlapping the player, scanning in roster order
fn first_contact(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| {
        o.active && circle_hits_obstacle(player.pos, player.radius, o.pos, &o.shape)
    })
}

/// Player against the roster, per the configured contact policy
fn resolve_player_contact(state: &mut GameState, now: f64) {
    match state.config.contact {
        ContactPolicy::Respawn => {
            if first_contact(&state.player, &state.obstacles).is_some() {
                state.player.pos = state.config.spawn_point();
                state.events.push(GameEvent::PlayerRespawned);
            }
        }
        ContactPolicy::Damage {
            amount,
            cooldown_secs,
        } => {
            let cooled_down = state
                .last_hit_at
                .is_none_or(|last| now - last >= cooldown_secs);
            if !cooled_down || first_contact(&state.player, &state.obstacles).is_none() {
                return;
            }

            state.last_hit_at = Some(now);
            let dead = state.player.take_damage(amount);
            state.events.push(GameEvent::PlayerHit {
                hp: state.player.hp,
            });
            log::debug!("Player hit, hp {}", state.player.hp);

            if dead {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::GameOver);
                log::info!(
                    "Game over at level {} after {} ticks",
                    state.player.level,
                    state.time_ticks
                );
            }
        }
    }
}
