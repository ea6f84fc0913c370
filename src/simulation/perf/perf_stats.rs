use wasm_bindgen::prelude::*;

/// Snapshot of the last step's timings, populated only while perf metrics
/// are enabled (zeros otherwise).
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) accel_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) frame: u64,
    pub(super) non_finite: bool,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn accel_ms(&self) -> f64 { self.accel_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    /// True when the sampled state contained NaN/infinity after the step.
    #[wasm_bindgen(getter)]
    pub fn non_finite(&self) -> bool { self.non_finite }
}
