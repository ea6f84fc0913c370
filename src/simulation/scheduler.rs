//! Run state for the external tick scheduler.
//!
//! Pausing is a scheduling concern, not a physics one: the engine core
//! never learns about it. The JS tick loop polls `is_running` and simply
//! stops issuing `step()` calls while paused, which freezes the state.

/// Scheduler state machine. Starts `Running`; `pause`/`resume` are
/// idempotent and there is no terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    pub fn pause(&mut self) {
        *self = RunState::Paused;
    }

    pub fn resume(&mut self) {
        *self = RunState::Running;
    }

    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}
