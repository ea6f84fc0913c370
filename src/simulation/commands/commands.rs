use std::f64::consts::FRAC_PI_2;

use crate::domain::command::Command;
use crate::domain::pendulum::{DEFAULT_ARM_LENGTH, DEFAULT_GRAVITY, DEFAULT_MASS};

use super::{settings, EngineCore};

pub(super) fn apply(engine: &mut EngineCore, command: Command) {
    match command {
        Command::SetArmLength1(v) => settings::set_arm_length_1(engine, v),
        Command::SetArmLength2(v) => settings::set_arm_length_2(engine, v),
        Command::SetTopMass(v) => settings::set_top_mass(engine, v),
        Command::SetBottomMass(v) => settings::set_bottom_mass(engine, v),
        Command::SetGravity(v) => settings::set_gravity(engine, v),
        Command::ResetPosition => reset_position(engine),
        Command::ResetAll => reset_all(engine),
        // Scheduling commands; the facade routes these to its RunState
        // before the core ever sees them.
        Command::Pause | Command::Resume => {}
    }
}

pub(super) fn reset_position(engine: &mut EngineCore) {
    let st = &mut engine.state;
    st.a1 = FRAC_PI_2;
    st.a2 = FRAC_PI_2;
    st.a1v = 0.0;
    st.a2v = 0.0;
    st.a1a = 0.0;
    st.a2a = 0.0;
}

pub(super) fn reset_all(engine: &mut EngineCore) {
    reset_position(engine);

    let st = &mut engine.state;
    st.r1 = DEFAULT_ARM_LENGTH;
    st.r2 = DEFAULT_ARM_LENGTH;
    st.m1 = DEFAULT_MASS;
    st.m2 = DEFAULT_MASS;
    st.g = DEFAULT_GRAVITY;
    // Derived positions are stale until the next step; zero them like the
    // rest of the kinematic state.
    st.x1 = 0.0;
    st.y1 = 0.0;
    st.x2 = 0.0;
    st.y2 = 0.0;

    engine.frame = 0;
}
