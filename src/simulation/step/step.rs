use super::{EngineCore, PerfTimer};

/// Per-tick velocity attenuation, a numerical stand-in for air resistance.
const DAMPING: f64 = 0.999;

pub(super) fn step(engine: &mut EngineCore) {
    let perf_on = engine.perf_enabled;
    if perf_on {
        engine.perf_stats.reset();
        engine.perf_stats.frame = engine.frame;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Copy of the pre-step state: every term below must read the angles,
    // velocities and parameters as they were before this tick touched them.
    let s = engine.state;

    // === ANGULAR ACCELERATIONS ===
    // Closed-form equations of motion for two point masses on rigid
    // links, both angles measured from the vertical.
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };

    let n1 = -s.g * (2.0 * s.m1 + s.m2) * s.a1.sin();
    let n2 = -s.m2 * s.g * (s.a1 - 2.0 * s.a2).sin();
    let n3 = -2.0 * (s.a1 - s.a2).sin() * s.m2;
    let n4 = s.a2v * s.a2v * s.r2 + s.a1v * s.a1v * s.r1 * (s.a1 - s.a2).cos();
    // The denominator vanishes when cos(2a1-2a2) reaches (2m1+m2)/m2.
    // The resulting blow-up is left to propagate; callers can watch
    // is_finite() if they care.
    let den = s.r1 * (2.0 * s.m1 + s.m2 - s.m2 * (2.0 * s.a1 - 2.0 * s.a2).cos());
    engine.state.a1a = (n1 + n2 + n3 * n4) / den;

    let n1 = 2.0 * (s.a1 - s.a2).sin();
    let n2 = s.a1v * s.a1v * s.r1 * (s.m1 + s.m2);
    let n3 = s.g * (s.m1 + s.m2) * s.a1.cos();
    let n4 = s.a2v * s.a2v * s.r2 * s.m2 * (s.a1 - s.a2).cos();
    let den = s.r2 * (2.0 * s.m1 + s.m2 - s.m2 * (2.0 * s.a1 - 2.0 * s.a2).cos());
    engine.state.a2a = (n1 * (n2 + n3 + n4)) / den;

    if let Some(t) = t0 {
        engine.perf_stats.accel_ms = t.elapsed_ms();
    }

    // === INTEGRATION ===
    // Semi-implicit Euler with a unit time step: one step() is one unit
    // of simulated time, independent of the scheduler's wall-clock
    // cadence. Velocity before angle, and damping after both.
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };

    let st = &mut engine.state;
    st.a1v += st.a1a;
    st.a2v += st.a2a;
    st.a1 += st.a1v;
    st.a2 += st.a2v;

    st.a1v *= DAMPING;
    st.a2v *= DAMPING;

    // === DERIVED POSITIONS ===
    // Joint 2 is a pure translation of joint 1 because a2 is measured
    // from the vertical too, not relative to link 1.
    st.x1 = st.r1 * st.a1.sin();
    st.y1 = st.r1 * st.a1.cos();
    st.x2 = st.r2 * st.a2.sin() + st.x1;
    st.y2 = st.r2 * st.a2.cos() + st.y1;

    if perf_on {
        if let Some(t) = t0 {
            engine.perf_stats.integrate_ms = t.elapsed_ms();
        }
        engine.perf_stats.non_finite = !engine.state.is_finite();
        if let Some(start) = step_start {
            engine.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    engine.frame += 1;
}
