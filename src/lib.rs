//! Pendulum Engine - Double pendulum simulation in WASM
//!
//! The physics lives here; window creation, rendering, widget layout and
//! the tick scheduler are JavaScript collaborators reached only through
//! the wasm API.
//!
//! Architecture:
//! - domain/     - Plain data: pendulum state, parameter limits, commands
//! - simulation/ - Engine core, integrator, JS facade

pub mod domain;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Pendulum WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::command::Command;
pub use domain::pendulum::PendulumState;
pub use simulation::{Engine, PerfStats, RunState};

// Export slider limits for JS so the control surface is built from the
// engine's own ranges
#[wasm_bindgen]
pub fn arm_length_min() -> f64 { domain::pendulum::ARM_LENGTH_MIN }
#[wasm_bindgen]
pub fn arm_length_max() -> f64 { domain::pendulum::ARM_LENGTH_MAX }
#[wasm_bindgen]
pub fn mass_min() -> f64 { domain::pendulum::MASS_MIN }
#[wasm_bindgen]
pub fn mass_max() -> f64 { domain::pendulum::MASS_MAX }
#[wasm_bindgen]
pub fn gravity_min() -> f64 { domain::pendulum::GRAVITY_MIN }
#[wasm_bindgen]
pub fn gravity_max() -> f64 { domain::pendulum::GRAVITY_MAX }
