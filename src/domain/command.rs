//! Command protocol for the control surface.
//!
//! Every slider and button maps 1:1 onto one variant, dispatched through a
//! single handler instead of one listener type per widget. The JS side may
//! also send commands as tagged JSON, e.g. `{"type":"set_gravity","value":5}`
//! or `{"type":"reset_all"}`.

use serde::{Deserialize, Serialize};

/// One control-surface command.
///
/// `Pause`/`Resume` address the scheduler's run state and never reach the
/// pendulum state; everything else mutates parameters or resets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Command {
    #[serde(rename = "set_arm_length_1")]
    SetArmLength1(f64),
    #[serde(rename = "set_arm_length_2")]
    SetArmLength2(f64),
    SetTopMass(f64),
    SetBottomMass(f64),
    SetGravity(f64),
    ResetPosition,
    ResetAll,
    Pause,
    Resume,
}

impl Command {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
