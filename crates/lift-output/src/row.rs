//! Plain data row types written by trace backends.

use lift_sim::{RunSummary, TickReport};

/// Car position and progress at the end of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickRow {
    pub tick:      u64,
    pub floor:     u32,
    pub motion:    String,
    pub completed: u32,
    pub total:     u32,
}

impl From<&TickReport> for TickRow {
    fn from(r: &TickReport) -> Self {
        Self {
            tick:      r.tick.0,
            floor:     r.floor.0,
            motion:    r.motion.to_string(),
            completed: r.completed,
            total:     r.total,
        }
    }
}

/// One finished or stopped run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRow {
    pub final_tick: u64,
    pub completed:  u32,
    pub total:      u32,
    pub reason:     String,
}

impl From<&RunSummary> for RunRow {
    fn from(s: &RunSummary) -> Self {
        Self {
            final_tick: s.final_tick.0,
            completed:  s.completed,
            total:      s.total,
            reason:     s.reason.to_string(),
        }
    }
}
