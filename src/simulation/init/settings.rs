use crate::domain::pendulum::{
    ARM_LENGTH_MAX, ARM_LENGTH_MIN, GRAVITY_MAX, GRAVITY_MIN, MASS_MAX, MASS_MIN,
};

use super::perf_stats::PerfStats;
use super::EngineCore;

pub(super) fn enable_perf_metrics(engine: &mut EngineCore, enabled: bool) {
    engine.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(engine: &EngineCore) -> PerfStats {
    engine.perf_stats.clone()
}

// Every setter clamps into its slider range; out-of-range input from the
// control surface silently lands on the nearest bound.

pub(super) fn set_arm_length_1(engine: &mut EngineCore, v: f64) {
    engine.state.r1 = v.clamp(ARM_LENGTH_MIN, ARM_LENGTH_MAX);
}

pub(super) fn set_arm_length_2(engine: &mut EngineCore, v: f64) {
    engine.state.r2 = v.clamp(ARM_LENGTH_MIN, ARM_LENGTH_MAX);
}

pub(super) fn set_top_mass(engine: &mut EngineCore, v: f64) {
    engine.state.m1 = v.clamp(MASS_MIN, MASS_MAX);
}

pub(super) fn set_bottom_mass(engine: &mut EngineCore, v: f64) {
    engine.state.m2 = v.clamp(MASS_MIN, MASS_MAX);
}

pub(super) fn set_gravity(engine: &mut EngineCore, v: f64) {
    engine.state.g = v.clamp(GRAVITY_MIN, GRAVITY_MAX);
}
