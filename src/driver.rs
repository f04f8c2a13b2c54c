//! Fixed-timestep frame driver
//!
//! Turns variable frame times into fixed simulation ticks and owns the
//! monotonic clock the contact cooldown is measured against. Also hosts the
//! autopilot used by the headless binary and demos.

use glam::Vec2;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GamePhase, GameState, TickInput, tick};

/// Longest frame the driver will try to catch up on
const MAX_FRAME_DT: f32 = 0.25;

/// Accumulates frame time and runs whole ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStepDriver {
    accumulator: f32,
    /// Simulated seconds since the driver started
    clock: f64,
    /// Total ticks run
    ticks: u64,
}

impl FixedStepDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current timestamp on the driver's clock
    pub fn now(&self) -> f64 {
        self.clock
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Feed one rendered frame's elapsed time and run as many ticks as fit.
    ///
    /// One-shot actions in `input` are consumed by the first tick and cleared.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, state: &mut GameState, input: &mut TickInput, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step(state, input);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop backlog the substep cap could never work off
        self.accumulator = self.accumulator.min(MAX_SUBSTEPS as f32 * SIM_DT);
        substeps
    }

    /// Run exactly one tick, ignoring the accumulator
    pub fn step(&mut self, state: &mut GameState, input: &mut TickInput) {
        self.clock += SIM_DT as f64;
        tick(state, input, SIM_DT, self.clock);
        self.ticks += 1;
        input.clear_one_shots();
    }
}

/// Distance at which the autopilot starts evading and dashes
const EVADE_RADIUS: f32 = 160.0;
const DASH_RADIUS: f32 = 70.0;

/// Demo input: run from the nearest active obstacle, dash when it gets close,
/// drift back toward the middle when nothing is near, restart on game over.
pub fn autopilot_input(state: &GameState) -> TickInput {
    if state.phase == GamePhase::GameOver {
        return TickInput {
            restart: true,
            ..Default::default()
        };
    }

    let player = state.player.pos;
    let nearest = state
        .obstacles
        .iter()
        .filter(|o| o.active)
        .map(|o| (o.pos, o.pos.distance(player)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let (heading, dash) = match nearest {
        Some((pos, dist)) if dist < EVADE_RADIUS => (player - pos, dist < DASH_RADIUS),
        _ => (state.config.spawn_point() - player, false),
    };

    let mut input = steer(heading);
    input.dash = dash && state.config.dash_distance.is_some();
    input
}

/// Map a heading to held directional keys, with a small dead zone
fn steer(heading: Vec2) -> TickInput {
    const DEAD_ZONE: f32 = 2.0;
    TickInput {
        right: heading.x > DEAD_ZONE,
        left: heading.x < -DEAD_ZONE,
        down: heading.y > DEAD_ZONE,
        up: heading.y < -DEAD_ZONE,
        ..Default::default()
    }
}
