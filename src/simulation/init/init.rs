use crate::domain::pendulum::PendulumState;

use super::perf_stats::PerfStats;
use super::EngineCore;

pub(super) fn create_engine_core() -> EngineCore {
    EngineCore {
        state: PendulumState::new(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
