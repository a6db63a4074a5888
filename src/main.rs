//! Mazewalk headless runner.
//!
//! Runs a configured walkthrough at roughly 60 frames per second against the
//! wall clock, feeding it a scripted input timeline and logging the camera
//! once per second.
//!
//! # Usage
//! ```text
//! mazewalk [moonlit | corridor | path/to/config.toml]
//! ```
//! Log verbosity follows `RUST_LOG` (default `info`). Ctrl-C quits.

use mazewalk::config::SimulationConfig;
use mazewalk::error::ConfigError;
use mazewalk::game::input::Action;
use mazewalk::game::{Simulation, TickOutcome};
use mazewalk::render::{LogRenderer, RenderAdapter};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const FRAMES_PER_LOG: u64 = 60;

fn load_config(arg: Option<String>) -> Result<SimulationConfig, ConfigError> {
    match arg {
        None => Ok(SimulationConfig::default()),
        Some(name) => match SimulationConfig::preset(&name) {
            Some(config) => Ok(config),
            None => SimulationConfig::load_from_file(&name),
        },
    }
}

fn run(config: SimulationConfig, quit: &AtomicBool) {
    let mut sim = match Simulation::from_config(&config) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Failed to build simulation: {}", e);
            std::process::exit(1);
        }
    };
    let script = config.script.unwrap_or_default();
    let mut renderer = LogRenderer::new(FRAMES_PER_LOG);
    let start = Instant::now();

    log::info!(
        "Running {:.1}s script, fly-in {}",
        script.duration(),
        if sim.in_transition() { "on" } else { "off" }
    );

    loop {
        let now = Instant::now();
        let elapsed = now.duration_since(start).as_secs_f32();
        let mut input = script.input_at(elapsed);
        if quit.load(Ordering::SeqCst) {
            input.press(Action::Quit);
        }

        let outcome = sim.step(&input, now);
        renderer.render(&sim.frame());

        if outcome == TickOutcome::Quit {
            log::info!("Quit requested");
            break;
        }
        if script.is_finished(elapsed) {
            log::info!("Script finished");
            break;
        }
        std::thread::sleep(FRAME_INTERVAL);
    }

    let pose = sim.pose();
    log::info!(
        "Stopped after {} frames at ({:.2}, {:.2}, {:.2}) yaw={:.1}",
        renderer.frames(),
        pose.x,
        pose.y,
        pose.z,
        pose.yaw
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match load_config(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let quit = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&quit);
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        log::warn!("Could not install Ctrl-C handler: {}", e);
    }

    run(config, &quit);
}
