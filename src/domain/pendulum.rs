//! Pendulum state and parameter limits.

use std::f64::consts::FRAC_PI_2;

use serde::Serialize;

// Slider ranges for the control surface. Setters clamp into these, so the
// engine never holds an out-of-range parameter.
pub const ARM_LENGTH_MIN: f64 = 50.0;
pub const ARM_LENGTH_MAX: f64 = 250.0;
pub const MASS_MIN: f64 = 10.0;
pub const MASS_MAX: f64 = 100.0;
/// Gravity is in simulation units, not SI.
pub const GRAVITY_MIN: f64 = 1.0;
pub const GRAVITY_MAX: f64 = 10.0;

pub const DEFAULT_ARM_LENGTH: f64 = 200.0;
pub const DEFAULT_MASS: f64 = 40.0;
pub const DEFAULT_GRAVITY: f64 = 1.0;

/// Physical parameters and kinematic state of the two-link pendulum.
///
/// Both angles are measured from the vertical, each link independently
/// (`a2` is NOT relative to link 1). The Cartesian fields `x1..y2` are
/// pivot-relative, derived from the angles on every step and never
/// written from anywhere else.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PendulumState {
    /// Link lengths.
    pub r1: f64,
    pub r2: f64,
    /// Point masses at joint 1 and joint 2.
    pub m1: f64,
    pub m2: f64,
    pub g: f64,
    /// Angles (radians); unbounded, wrap implicitly through sin/cos.
    pub a1: f64,
    pub a2: f64,
    /// Angular velocities; damped every tick.
    pub a1v: f64,
    pub a2v: f64,
    /// Angular accelerations; fully recomputed each tick.
    pub a1a: f64,
    pub a2a: f64,
    // Derived joint positions.
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl PendulumState {
    /// Default pendulum: both links horizontal, at rest. Equals the state
    /// produced by a full reset.
    pub fn new() -> Self {
        Self {
            r1: DEFAULT_ARM_LENGTH,
            r2: DEFAULT_ARM_LENGTH,
            m1: DEFAULT_MASS,
            m2: DEFAULT_MASS,
            g: DEFAULT_GRAVITY,
            a1: FRAC_PI_2,
            a2: FRAC_PI_2,
            a1v: 0.0,
            a2v: 0.0,
            a1a: 0.0,
            a2a: 0.0,
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 0.0,
        }
    }

    /// True while no field has blown up to NaN/infinity. The integrator
    /// does not guard the near-zero denominator in its equations of
    /// motion; this is the detection hook for callers and tests.
    pub fn is_finite(&self) -> bool {
        [
            self.r1, self.r2, self.m1, self.m2, self.g, self.a1, self.a2, self.a1v, self.a2v,
            self.a1a, self.a2a, self.x1, self.y1, self.x2, self.y2,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Default for PendulumState {
    fn default() -> Self {
        Self::new()
    }
}
