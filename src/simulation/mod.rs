//! Engine - double pendulum simulation core
//!
//! The core only orchestrates and delegates:
//! - Equations of motion and the integrator are in step/
//! - Reset handling and command dispatch are in commands/
//! - Parameter clamping is in init/settings.rs
//! - The JS-facing surface is in facade.rs
//!
//! Pausing never reaches this module: the run-state machine in
//! scheduler.rs belongs to the facade, and the external tick loop simply
//! stops calling `step()` while paused.

use crate::domain::command::Command;
use crate::domain::pendulum::PendulumState;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;
mod scheduler;

pub use facade::Engine;
pub use perf_stats::PerfStats;
pub use scheduler::RunState;

use perf_timer::PerfTimer;

/// The simulation engine core.
///
/// Owns the single `PendulumState` instance; all mutation goes through
/// these methods, on one thread, so no locking is needed anywhere.
pub struct EngineCore {
    state: PendulumState,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl EngineCore {
    /// Create an engine with the default pendulum (both links horizontal).
    pub fn new() -> Self {
        init::create_engine_core()
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Set the length of link 1, clamped to the slider range.
    /// Takes effect on the next `step()`.
    pub fn set_arm_length_1(&mut self, v: f64) {
        settings::set_arm_length_1(self, v);
    }

    /// Set the length of link 2, clamped.
    pub fn set_arm_length_2(&mut self, v: f64) {
        settings::set_arm_length_2(self, v);
    }

    /// Set the mass at joint 1, clamped.
    pub fn set_top_mass(&mut self, v: f64) {
        settings::set_top_mass(self, v);
    }

    /// Set the mass at joint 2, clamped.
    pub fn set_bottom_mass(&mut self, v: f64) {
        settings::set_bottom_mass(self, v);
    }

    /// Set gravity (simulation units), clamped.
    pub fn set_gravity(&mut self, v: f64) {
        settings::set_gravity(self, v);
    }

    /// Put both links back to horizontal at rest; parameters untouched.
    pub fn reset_position(&mut self) {
        commands::reset_position(self);
    }

    /// Full reset: position, velocities, parameters and derived positions.
    pub fn reset_all(&mut self) {
        commands::reset_all(self);
    }

    /// Dispatch one state-mutating command.
    pub fn apply(&mut self, command: Command) {
        commands::apply(self, command);
    }

    /// Advance the simulation by exactly one tick, in place.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Numerical blow-up detector; see `PendulumState::is_finite`.
    pub fn is_finite(&self) -> bool {
        self.state.is_finite()
    }

    /// Full state snapshot as JSON (readout/debug for the JS UI).
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_default()
    }
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
