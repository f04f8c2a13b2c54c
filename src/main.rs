//! Arena Survivor headless runner
//!
//! Runs the simulation at the fixed tick rate with the autopilot at the
//! controls, routing audio cues to the log. Useful for soak runs and for
//! eyeballing balance changes.
//!
//! Usage: arena-survivor [--variant NAME] [--config PATH] [--seed N] [--ticks N] [--dump]

use arena_survivor::audio::AudioManager;
use arena_survivor::consts::{SIM_DT, TICK_RATE};
use arena_survivor::driver::{FixedStepDriver, autopilot_input};
use arena_survivor::sim::{GameEvent, GameState};
use arena_survivor::snapshot::Snapshot;
use arena_survivor::{SimConfig, Variant};

/// Command line options
struct Options {
    variant: Variant,
    config_path: Option<String>,
    seed: u64,
    ticks: u64,
    dump: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            config_path: None,
            seed: 0x5eed,
            ticks: 60 * TICK_RATE as u64,
            dump: false,
        }
    }
}

fn parse_args() -> Options {
    let mut opts = Options::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--variant" => match args.next().as_deref().and_then(Variant::from_str) {
                Some(v) => opts.variant = v,
                None => log::warn!("Unknown variant, using {}", opts.variant.as_str()),
            },
            "--config" => opts.config_path = args.next(),
            "--seed" => match args.next().and_then(|s| s.parse().ok()) {
                Some(seed) => opts.seed = seed,
                None => log::warn!("Invalid --seed, using {}", opts.seed),
            },
            "--ticks" => match args.next().and_then(|s| s.parse().ok()) {
                Some(ticks) => opts.ticks = ticks,
                None => log::warn!("Invalid --ticks, using {}", opts.ticks),
            },
            "--dump" => opts.dump = true,
            other => log::warn!("Ignoring unknown argument {other}"),
        }
    }
    opts
}

/// Resolve the config: a file if given and usable, else the preset
fn load_config(opts: &Options) -> SimConfig {
    if let Some(path) = &opts.config_path {
        match SimConfig::load(path) {
            Ok(config) => return config,
            Err(e) => log::error!("{e}; falling back to {} preset", opts.variant.as_str()),
        }
    }
    SimConfig::from_preset(opts.variant)
}

fn main() {
    env_logger::init();
    let opts = parse_args();
    let config = load_config(&opts);
    log::info!(
        "Arena Survivor ({}) seed={} ticks={}",
        config.variant.as_str(),
        opts.seed,
        opts.ticks
    );

    let mut state = GameState::new(config, opts.seed);
    let mut driver = FixedStepDriver::new();
    let mut audio = AudioManager::default();

    let mut kills = 0u64;
    let mut deaths = 0u64;
    let mut best_level = 1;

    while driver.ticks() < opts.ticks {
        let mut input = autopilot_input(&state);
        driver.advance(&mut state, &mut input, SIM_DT);

        audio.handle_events(&state.events);
        for event in &state.events {
            match event {
                GameEvent::ObstacleDestroyed { .. } => kills += 1,
                GameEvent::GameOver => deaths += 1,
                GameEvent::LevelUp { level } => {
                    best_level = best_level.max(*level);
                    log::info!("Reached level {level}");
                }
                _ => {}
            }
        }
    }

    log::info!(
        "Done after {} ticks ({:.1}s): {} kills, {} deaths, best level {}, hp {}",
        driver.ticks(),
        driver.now(),
        kills,
        deaths,
        best_level,
        state.player.hp
    );

    if opts.dump {
        match serde_json::to_string_pretty(&Snapshot::capture(&state)) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize snapshot: {e}"),
        }
    }
}
