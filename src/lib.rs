//! Mazewalk - a first-person maze walkthrough core.
//!
//! The crate holds everything a maze walkthrough needs apart from drawing:
//! the maze topology and its spatial queries, point-sampled collision, the
//! keyboard/pointer motion integrator and the eased camera fly-in that hands
//! control to the player.
//!
//! # Architecture
//! - `maze/`: occupancy and wall-flag grids, world/grid mapping, built-in layouts
//! - `game/`: pose, input, collision, motion, fly-in and the [`game::Simulation`] loop state
//! - `math/`: vectors, view matrices and easing
//! - `render`: the read-only seam a renderer plugs into
//! - `config`: static configuration, presets and `.toml` loading
//! - `demo`: scripted input for running headless
//!
//! # Usage
//! ```
//! use mazewalk::config::SimulationConfig;
//! use mazewalk::game::Simulation;
//! use mazewalk::game::input::{Action, InputState};
//!
//! let mut sim = Simulation::from_config(&SimulationConfig::moonlit()).unwrap();
//! sim.advance(&InputState::holding([Action::SkipTransition]), 0.016);
//! assert!(!sim.in_transition());
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod game;
pub mod maze;
pub mod math;
pub mod render;
