//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Scheduled passenger
//! actions and safety triggers are matched against it by equality, so integer
//! ticks keep every comparison exact.
//!
//! `SimClock` owns the current tick together with the `running` / `paused`
//! flags that make up the scheduler's run state.  The clock only advances
//! while running and not paused, and `reset` returns it to tick 0.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation time step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RunState ──────────────────────────────────────────────────────────────────

/// The tick scheduler's lifecycle state.
///
/// ```text
/// Stopped ──start──▶ Running ──pause──▶ Paused
///    ▲                  │  ◀──resume──     │
///    └──────stop────────┴──────stop────────┘
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
    Paused,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunState::Stopped => "stopped",
            RunState::Running => "running",
            RunState::Paused  => "paused",
        };
        f.write_str(s)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The authoritative simulated clock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimClock {
    /// The current time step.
    pub current_tick: Tick,
    /// `true` between `start` and `stop`.
    pub running: bool,
    /// `true` while a running simulation is suspended.
    pub paused: bool,
}

impl SimClock {
    /// A stopped clock at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived lifecycle state.
    #[inline]
    pub fn state(&self) -> RunState {
        match (self.running, self.paused) {
            (false, _)    => RunState::Stopped,
            (true, false) => RunState::Running,
            (true, true)  => RunState::Paused,
        }
    }

    /// `true` when ticks should be delivered (`running && !paused`).
    #[inline]
    pub fn is_ticking(&self) -> bool {
        self.running && !self.paused
    }

    /// Advance by exactly one tick.
    ///
    /// # Panics
    /// Panics in debug mode if the clock is not ticking.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.is_ticking(), "clock advanced while {}", self.state());
        self.current_tick = self.current_tick + 1;
    }

    /// Back to a stopped clock at tick 0.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_tick, self.state())
    }
}
