use wasm_bindgen::prelude::*;

use crate::domain::command::Command;

use super::perf_stats::PerfStats;
use super::scheduler::RunState;
use super::EngineCore;

/// JS-facing engine: the core plus the scheduler's run state.
///
/// After each `step()` the renderer reads `x1,y1,x2,y2` (pivot-relative)
/// and `m1,m2` (bob diameters) to draw the rods and bobs; any screen
/// offset is the renderer's business.
#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
    run_state: RunState,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine with the default pendulum, running.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: EngineCore::new(),
            run_state: RunState::default(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x1(&self) -> f64 { self.core.state().x1 }
    #[wasm_bindgen(getter)]
    pub fn y1(&self) -> f64 { self.core.state().y1 }
    #[wasm_bindgen(getter)]
    pub fn x2(&self) -> f64 { self.core.state().x2 }
    #[wasm_bindgen(getter)]
    pub fn y2(&self) -> f64 { self.core.state().y2 }

    #[wasm_bindgen(getter)]
    pub fn r1(&self) -> f64 { self.core.state().r1 }
    #[wasm_bindgen(getter)]
    pub fn r2(&self) -> f64 { self.core.state().r2 }
    #[wasm_bindgen(getter)]
    pub fn m1(&self) -> f64 { self.core.state().m1 }
    #[wasm_bindgen(getter)]
    pub fn m2(&self) -> f64 { self.core.state().m2 }
    #[wasm_bindgen(getter)]
    pub fn g(&self) -> f64 { self.core.state().g }

    #[wasm_bindgen(getter)]
    pub fn a1(&self) -> f64 { self.core.state().a1 }
    #[wasm_bindgen(getter)]
    pub fn a2(&self) -> f64 { self.core.state().a2 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Advance the simulation by one tick.
    ///
    /// The scheduler must only call this while `is_running`; pausing is
    /// its job, the engine does not guard against it.
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn set_arm_length_1(&mut self, v: f64) {
        self.core.set_arm_length_1(v);
    }

    pub fn set_arm_length_2(&mut self, v: f64) {
        self.core.set_arm_length_2(v);
    }

    pub fn set_top_mass(&mut self, v: f64) {
        self.core.set_top_mass(v);
    }

    pub fn set_bottom_mass(&mut self, v: f64) {
        self.core.set_bottom_mass(v);
    }

    pub fn set_gravity(&mut self, v: f64) {
        self.core.set_gravity(v);
    }

    /// Put both links back to horizontal at rest; parameters untouched.
    pub fn reset_position(&mut self) {
        self.core.reset_position();
    }

    /// Full reset of position, velocities and parameters.
    pub fn reset_all(&mut self) {
        self.core.reset_all();
    }

    /// Tell the scheduler to stop ticking. Idempotent.
    pub fn pause(&mut self) {
        self.run_state.pause();
    }

    /// Tell the scheduler to tick again. Idempotent.
    pub fn resume(&mut self) {
        self.run_state.resume();
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }

    /// Apply a tagged JSON command from the control surface,
    /// e.g. `{"type":"set_gravity","value":5}`.
    pub fn apply_command_json(&mut self, json: String) -> Result<(), JsValue> {
        let command = Command::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        self.apply(command);
        Ok(())
    }

    /// Full state snapshot as JSON (readout/debug for the JS UI).
    pub fn get_state_json(&self) -> String {
        self.core.state_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// False once numerical degeneracy has produced NaN/infinity.
    pub fn is_finite(&self) -> bool {
        self.core.is_finite()
    }
}

// Not exported to JS: typed command dispatch for Rust callers and tests.
impl Engine {
    /// Dispatch one command. `Pause`/`Resume` stop at the run state; the
    /// rest reach the core.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Pause => self.run_state.pause(),
            Command::Resume => self.run_state.resume(),
            other => self.core.apply(other),
        }
    }

    /// Read-only view of the owned state.
    pub fn state(&self) -> &crate::domain::pendulum::PendulumState {
        self.core.state()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
