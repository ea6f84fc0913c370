use std::f64::consts::FRAC_PI_2;

use super::*;
use crate::domain::command::Command;
use crate::domain::pendulum::{
    ARM_LENGTH_MAX, ARM_LENGTH_MIN, DEFAULT_ARM_LENGTH, DEFAULT_GRAVITY, DEFAULT_MASS,
    GRAVITY_MAX, GRAVITY_MIN, MASS_MIN,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn hanging_straight_down_stays_at_rest() {
    let mut engine = EngineCore::new();
    engine.state.a1 = 0.0;
    engine.state.a2 = 0.0;

    for _ in 0..100 {
        engine.step();
    }

    // Every sin term in the equations of motion vanishes at the
    // equilibrium, so nothing ever moves.
    assert_eq!(engine.state.a1, 0.0);
    assert_eq!(engine.state.a2, 0.0);
    assert_eq!(engine.state.a1v, 0.0);
    assert_eq!(engine.state.a2v, 0.0);
    assert_eq!(engine.state.a1a, 0.0);
    assert_eq!(engine.state.a2a, 0.0);

    // Both links hang straight down from the pivot.
    assert_eq!(engine.state.x1, 0.0);
    assert_eq!(engine.state.y1, DEFAULT_ARM_LENGTH);
    assert_eq!(engine.state.x2, 0.0);
    assert_eq!(engine.state.y2, 2.0 * DEFAULT_ARM_LENGTH);
}

#[test]
fn one_step_from_horizontal_matches_closed_form() {
    let mut engine = EngineCore::new();
    let s = *engine.state();

    engine.step();

    // Recompute the whole tick independently from the pre-step values.
    let n1 = -s.g * (2.0 * s.m1 + s.m2) * s.a1.sin();
    let n2 = -s.m2 * s.g * (s.a1 - 2.0 * s.a2).sin();
    let n3 = -2.0 * (s.a1 - s.a2).sin() * s.m2;
    let n4 = s.a2v * s.a2v * s.r2 + s.a1v * s.a1v * s.r1 * (s.a1 - s.a2).cos();
    let den = s.r1 * (2.0 * s.m1 + s.m2 - s.m2 * (2.0 * s.a1 - 2.0 * s.a2).cos());
    let a1a = (n1 + n2 + n3 * n4) / den;

    let k1 = 2.0 * (s.a1 - s.a2).sin();
    let k2 = s.a1v * s.a1v * s.r1 * (s.m1 + s.m2);
    let k3 = s.g * (s.m1 + s.m2) * s.a1.cos();
    let k4 = s.a2v * s.a2v * s.r2 * s.m2 * (s.a1 - s.a2).cos();
    let den2 = s.r2 * (2.0 * s.m1 + s.m2 - s.m2 * (2.0 * s.a1 - 2.0 * s.a2).cos());
    let a2a = (k1 * (k2 + k3 + k4)) / den2;

    let a1 = s.a1 + a1a;
    let a2 = s.a2 + a2a;

    assert_close(engine.state.a1a, a1a);
    assert_close(engine.state.a2a, a2a);
    assert_close(engine.state.a1v, a1a * 0.999);
    assert_close(engine.state.a2v, a2a * 0.999);
    assert_close(engine.state.a1, a1);
    assert_close(engine.state.a2, a2);

    assert_close(engine.state.x1, s.r1 * a1.sin());
    assert_close(engine.state.y1, s.r1 * a1.cos());
    assert_close(engine.state.x2, s.r2 * a2.sin() + s.r1 * a1.sin());
    assert_close(engine.state.y2, s.r2 * a2.cos() + s.r1 * a1.cos());

    // From horizontal with default parameters the first link gets a
    // restoring kick of -g/200 and the second none at all.
    assert_close(engine.state.a1a, -0.005);
    assert_close(engine.state.a2a, 0.0);
}

#[test]
fn setters_clamp_into_slider_ranges() {
    let mut engine = EngineCore::new();

    engine.set_arm_length_1(9999.0);
    assert_eq!(engine.state().r1, ARM_LENGTH_MAX);
    engine.set_arm_length_2(1.0);
    assert_eq!(engine.state().r2, ARM_LENGTH_MIN);
    engine.set_arm_length_1(120.0);
    assert_eq!(engine.state().r1, 120.0);

    engine.set_top_mass(-3.0);
    assert_eq!(engine.state().m1, MASS_MIN);
    engine.set_bottom_mass(55.0);
    assert_eq!(engine.state().m2, 55.0);

    engine.set_gravity(0.0);
    assert_eq!(engine.state().g, GRAVITY_MIN);
    engine.set_gravity(1e6);
    assert_eq!(engine.state().g, GRAVITY_MAX);
}

#[test]
fn setters_do_not_touch_derived_positions_until_next_step() {
    let mut engine = EngineCore::new();
    engine.step();
    let before = *engine.state();

    engine.set_arm_length_1(100.0);
    assert_eq!(engine.state().x1, before.x1);
    assert_eq!(engine.state().y1, before.y1);
    assert_eq!(engine.state().x2, before.x2);
    assert_eq!(engine.state().y2, before.y2);

    engine.step();
    assert_ne!(engine.state().y1, before.y1);
}

#[test]
fn reset_position_keeps_parameters() {
    let mut engine = EngineCore::new();
    engine.set_arm_length_1(77.0);
    engine.set_gravity(4.0);
    for _ in 0..10 {
        engine.step();
    }

    engine.reset_position();

    assert_eq!(engine.state().a1, FRAC_PI_2);
    assert_eq!(engine.state().a2, FRAC_PI_2);
    assert_eq!(engine.state().a1v, 0.0);
    assert_eq!(engine.state().a2v, 0.0);
    assert_eq!(engine.state().a1a, 0.0);
    assert_eq!(engine.state().a2a, 0.0);
    assert_eq!(engine.state().r1, 77.0);
    assert_eq!(engine.state().g, 4.0);
}

#[test]
fn reset_all_is_idempotent_and_restores_defaults() {
    let mut engine = EngineCore::new();
    engine.set_arm_length_2(90.0);
    engine.set_top_mass(15.0);
    for _ in 0..25 {
        engine.step();
    }

    engine.reset_all();
    let once = *engine.state();
    engine.reset_all();
    assert_eq!(*engine.state(), once);

    assert_eq!(once.r1, DEFAULT_ARM_LENGTH);
    assert_eq!(once.r2, DEFAULT_ARM_LENGTH);
    assert_eq!(once.m1, DEFAULT_MASS);
    assert_eq!(once.m2, DEFAULT_MASS);
    assert_eq!(once.g, DEFAULT_GRAVITY);
    assert_eq!(once.x1, 0.0);
    assert_eq!(once.y1, 0.0);
    assert_eq!(once.x2, 0.0);
    assert_eq!(once.y2, 0.0);
    assert_eq!(engine.frame(), 0);

    // A fresh engine and a fully reset one are the same state.
    assert_eq!(*EngineCore::new().state(), once);
}

#[test]
fn identical_inputs_replay_bit_identical() {
    let run = || {
        let mut engine = EngineCore::new();
        for i in 0..200u32 {
            if i == 50 {
                engine.apply(Command::SetGravity(3.0));
            }
            if i == 120 {
                engine.apply(Command::SetBottomMass(80.0));
            }
            if i == 150 {
                engine.apply(Command::ResetPosition);
            }
            engine.step();
        }
        *engine.state()
    };

    // No hidden randomness or time dependence: bit-for-bit equal.
    assert_eq!(run(), run());
}

#[test]
fn zero_gravity_at_rest_stays_put() {
    // g=0 is below the slider range, so write the field directly.
    let mut engine = EngineCore::new();
    engine.state.g = 0.0;
    engine.state.a1 = 0.7;
    engine.state.a2 = 1.3;

    for _ in 0..50 {
        engine.step();
    }

    assert_eq!(engine.state().a1, 0.7);
    assert_eq!(engine.state().a2, 1.3);
    assert_eq!(engine.state().a1v, 0.0);
    assert_eq!(engine.state().a2v, 0.0);
}

#[test]
fn damping_attenuates_velocity_absent_acceleration() {
    // Equal angles and g=0 zero out both accelerations, leaving only the
    // integrator and the damping factor.
    let mut engine = EngineCore::new();
    engine.state.g = 0.0;
    engine.state.a1 = 0.4;
    engine.state.a2 = 0.4;
    engine.state.a1v = 1.0;
    engine.state.a2v = -0.5;

    engine.step();

    assert_eq!(engine.state().a1a, 0.0);
    assert_eq!(engine.state().a2a, 0.0);
    assert_close(engine.state().a1v, 0.999);
    assert_close(engine.state().a2v, -0.4995);
    assert_close(engine.state().a1, 1.4);
    assert_close(engine.state().a2, -0.1);
}

#[test]
fn more_gravity_means_more_restoring_acceleration() {
    let mut weak = EngineCore::new();
    let mut strong = EngineCore::new();
    strong.set_gravity(2.0);

    weak.step();
    strong.step();

    assert!(strong.state().a1a.abs() > weak.state().a1a.abs());
}

#[test]
fn command_dispatch_matches_direct_setters() {
    let mut by_command = EngineCore::new();
    let mut by_setter = EngineCore::new();

    by_command.apply(Command::SetArmLength1(130.0));
    by_command.apply(Command::SetArmLength2(9999.0));
    by_command.apply(Command::SetTopMass(22.0));
    by_command.apply(Command::SetBottomMass(33.0));
    by_command.apply(Command::SetGravity(5.0));

    by_setter.set_arm_length_1(130.0);
    by_setter.set_arm_length_2(9999.0);
    by_setter.set_top_mass(22.0);
    by_setter.set_bottom_mass(33.0);
    by_setter.set_gravity(5.0);

    assert_eq!(*by_command.state(), *by_setter.state());

    by_command.apply(Command::ResetAll);
    assert_eq!(*by_command.state(), *EngineCore::new().state());
}

#[test]
fn pause_and_resume_commands_never_touch_core_state() {
    let mut engine = EngineCore::new();
    engine.step();
    let before = *engine.state();

    engine.apply(Command::Pause);
    assert_eq!(*engine.state(), before);
    engine.apply(Command::Resume);
    assert_eq!(*engine.state(), before);
}

#[test]
fn facade_run_state_transitions_are_idempotent() {
    let mut engine = Engine::new();
    assert!(engine.is_running());

    engine.apply(Command::Pause);
    assert!(!engine.is_running());
    engine.apply(Command::Pause);
    assert!(!engine.is_running());

    let frozen = *engine.state();
    engine.apply(Command::Resume);
    engine.apply(Command::Resume);
    assert!(engine.is_running());
    assert_eq!(*engine.state(), frozen);
}

#[test]
fn commands_parse_from_tagged_json() {
    assert_eq!(
        Command::from_json(r#"{"type":"set_arm_length_1","value":120}"#),
        Ok(Command::SetArmLength1(120.0))
    );
    assert_eq!(
        Command::from_json(r#"{"type":"set_gravity","value":5}"#),
        Ok(Command::SetGravity(5.0))
    );
    assert_eq!(
        Command::from_json(r#"{"type":"reset_all"}"#),
        Ok(Command::ResetAll)
    );
    assert_eq!(Command::from_json(r#"{"type":"pause"}"#), Ok(Command::Pause));

    assert!(Command::from_json("not json").is_err());
    assert!(Command::from_json(r#"{"type":"set_warp_speed","value":9}"#).is_err());
}

#[test]
fn injected_nan_is_reported_not_corrected() {
    let mut engine = EngineCore::new();
    engine.enable_perf_metrics(true);
    engine.state.a1 = f64::NAN;
    assert!(!engine.is_finite());

    // The step lets the NaN propagate through velocities and positions.
    engine.step();
    assert!(!engine.is_finite());
    assert!(engine.state().x1.is_nan());
    assert!(engine.get_perf_stats().non_finite());
}

#[test]
fn state_json_snapshot_carries_all_fields() {
    let engine = EngineCore::new();
    let json = engine.state_json();
    for key in [
        "\"r1\"", "\"r2\"", "\"m1\"", "\"m2\"", "\"g\"", "\"a1\"", "\"a2\"", "\"a1v\"",
        "\"a2v\"", "\"x1\"", "\"y2\"",
    ] {
        assert!(json.contains(key), "missing {key} in {json}");
    }
}
