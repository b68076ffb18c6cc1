//! Building and run configuration.
//!
//! Typically loaded from a TOML file by the application crate and handed to
//! the simulation builder.

use std::fmt;

use crate::{LiftError, LiftResult, SimRng};

// ── BuildingConfig ────────────────────────────────────────────────────────────

/// Building parameters read once at `start()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildingConfig {
    /// Passengers that must reach a destination before the run completes.
    pub passenger_count: u32,

    /// Floors served, numbered `1..=floor_count`.
    pub floor_count: u32,

    /// Informational only; narrated in the setup snapshot.  The simulator
    /// always drives a single car.
    pub elevator_count: u32,
}

impl BuildingConfig {
    pub fn new(passenger_count: u32, floor_count: u32) -> Self {
        Self { passenger_count, floor_count, elevator_count: 1 }
    }
}

impl fmt::Display for BuildingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passengers, {} floors, {} elevators",
            self.passenger_count, self.floor_count, self.elevator_count
        )
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level settings that are not part of the scenario itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Real milliseconds between ticks when driven by a timer.  Default: 1000.
    pub tick_interval_ms: u64,

    /// Master RNG seed.  `None` seeds once from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { tick_interval_ms: 1_000, seed: None }
    }
}

impl SimConfig {
    /// Reject settings the tick driver cannot honour.
    pub fn validate(&self) -> LiftResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(LiftError::Config("tick_interval_ms must be > 0".into()));
        }
        Ok(())
    }

    /// Construct the single `SimRng` for this process.
    pub fn make_rng(&self) -> SimRng {
        match self.seed {
            Some(seed) => SimRng::new(seed),
            None       => SimRng::from_entropy(),
        }
    }
}
