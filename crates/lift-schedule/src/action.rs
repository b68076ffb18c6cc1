//! Passenger action types.

use std::fmt;
use std::str::FromStr;

use lift_core::{Floor, PassengerId, Tick};

use crate::ScheduleError;

// ── ActionKind ────────────────────────────────────────────────────────────────

/// What a passenger does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Call the car to `floor` and board it there.
    RequestCar,
    /// Ride to `floor` (if not already there) and leave the car.
    ExitCar,
    OpenDoor,
    CloseDoor,
    /// Press the in-car help button; resolved as a Help safety event.
    PushHelp,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::RequestCar,
        ActionKind::ExitCar,
        ActionKind::OpenDoor,
        ActionKind::CloseDoor,
        ActionKind::PushHelp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::RequestCar => "RequestCar",
            ActionKind::ExitCar    => "ExitCar",
            ActionKind::OpenDoor   => "OpenDoor",
            ActionKind::CloseDoor  => "CloseDoor",
            ActionKind::PushHelp   => "PushHelp",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ScheduleError;

    /// Case-insensitive match on the variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ActionKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScheduleError::UnknownKind(s.to_owned()))
    }
}

// ── PassengerAction ───────────────────────────────────────────────────────────

/// One scheduled (or synthesized) passenger intent.  Immutable once built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PassengerAction {
    pub kind:      ActionKind,
    pub floor:     Floor,
    pub time_step: Tick,
    /// Who acts, when the scenario names them.  Synthesized actions are
    /// anonymous.
    pub passenger: Option<PassengerId>,
}

impl PassengerAction {
    pub fn new(kind: ActionKind, floor: Floor, time_step: Tick) -> Self {
        Self { kind, floor, time_step, passenger: None }
    }

    pub fn with_passenger(mut self, passenger: PassengerId) -> Self {
        self.passenger = Some(passenger);
        self
    }

    /// `"Passenger 3"`, or just `"Passenger"` when anonymous.
    pub fn actor(&self) -> String {
        match self.passenger {
            Some(id) => format!("Passenger {id}"),
            None => "Passenger".to_owned(),
        }
    }
}
