//! The elevator car's movement state machine.
//!
//! # Transitions
//!
//! ```text
//! Idle ──travel_to──▶ Moving ──(arrive)──▶ Stopped ──settle──▶ Idle
//! ```
//!
//! `Moving` never outlives a `travel_to` call: the floor-by-floor traversal
//! is narrated synchronously and the car is `Stopped` at the destination
//! when the call returns.  The caller settles it back to `Idle` once the
//! action that requested the trip is done.

use std::fmt;

use log::warn;

use lift_core::Floor;

use crate::{NarrationSink, SEPARATOR};

// ── Motion ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    Idle,
    Moving,
    Stopped,
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Motion::Idle    => "Idle",
            Motion::Moving  => "Moving",
            Motion::Stopped => "Stopped",
        };
        f.write_str(s)
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// The single car.  Its floor always lies in `[1, max(floor_count, 1)]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Elevator {
    floor:       Floor,
    motion:      Motion,
    floor_count: u32,
}

impl Elevator {
    /// An idle car at the lobby.
    pub fn new(floor_count: u32) -> Self {
        Self { floor: Floor::LOBBY, motion: Motion::Idle, floor_count }
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Narrate the car's position and motion.
    pub fn announce<N: NarrationSink + ?Sized>(&self, sink: &mut N) {
        sink.emit(&format!("Elevator is at floor {}, state: {}.", self.floor, self.motion));
    }

    /// Move to `destination`, narrating every floor passed on the way.
    ///
    /// Out-of-range destinations are clamped into the building.  When the
    /// car is already there nothing happens: no state change, no narration.
    /// Otherwise the car ends `Stopped` at the destination.
    ///
    /// Returns the floors passed, in order, ending with the destination.
    pub fn travel_to<N: NarrationSink + ?Sized>(&mut self, destination: Floor, sink: &mut N) -> Vec<Floor> {
        let dest = destination.clamp_to(self.floor_count);
        if dest != destination {
            warn!("floor {destination} outside 1..={}; clamped to {dest}", self.floor_count);
        }
        if dest == self.floor {
            return vec![];
        }

        self.settle();
        self.motion = Motion::Moving;
        self.announce(sink);

        sink.emit(SEPARATOR);
        let path = self.floor.path_to(dest);
        for floor in &path {
            sink.emit(&format!("Elevator moving to floor {floor}..."));
        }

        self.floor = dest;
        self.motion = Motion::Stopped;
        self.announce(sink);
        path
    }

    /// `Stopped` → `Idle`.  No-op in any other state.
    pub fn settle(&mut self) {
        if self.motion == Motion::Stopped {
            self.motion = Motion::Idle;
        }
    }

    /// Back to an idle car at the lobby of a `floor_count`-floor building.
    pub fn reset(&mut self, floor_count: u32) {
        *self = Self::new(floor_count);
    }
}
