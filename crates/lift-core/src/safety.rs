//! Safety event kinds and their trigger schedule.

use std::fmt;
use std::str::FromStr;

use crate::{LiftError, Tick};

// ── SafetyEventKind ───────────────────────────────────────────────────────────

/// The five incident kinds the simulator can inject.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SafetyEventKind {
    Help,
    DoorObstacle,
    Fire,
    Overload,
    PowerOut,
}

impl SafetyEventKind {
    /// All kinds in resolution order.  When several trigger on the same tick
    /// they are resolved in exactly this order.
    pub const ALL: [SafetyEventKind; 5] = [
        SafetyEventKind::Help,
        SafetyEventKind::DoorObstacle,
        SafetyEventKind::Fire,
        SafetyEventKind::Overload,
        SafetyEventKind::PowerOut,
    ];

    /// Human-readable name used in the setup snapshot.
    pub fn label(self) -> &'static str {
        match self {
            SafetyEventKind::Help         => "Help Event",
            SafetyEventKind::DoorObstacle => "Door Obstacle",
            SafetyEventKind::Fire         => "Fire",
            SafetyEventKind::Overload     => "Overload",
            SafetyEventKind::PowerOut     => "Power Out",
        }
    }
}

impl fmt::Display for SafetyEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SafetyEventKind {
    type Err = LiftError;

    /// Accepts the variant name in any case, with or without `_`/`-`
    /// separators (`"power_out"`, `"PowerOut"`, `"powerout"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "help"         => Ok(SafetyEventKind::Help),
            "doorobstacle" => Ok(SafetyEventKind::DoorObstacle),
            "fire"         => Ok(SafetyEventKind::Fire),
            "overload"     => Ok(SafetyEventKind::Overload),
            "powerout"     => Ok(SafetyEventKind::PowerOut),
            _ => Err(LiftError::Parse(format!("unknown safety event {s:?}"))),
        }
    }
}

// ── SafetyTriggers ────────────────────────────────────────────────────────────

/// Optional trigger time step per safety event kind.
///
/// `None` means the event never fires.  Each configured event fires on the
/// one tick equal to its trigger; there is no catch-up for past ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SafetyTriggers {
    pub help:          Option<Tick>,
    pub door_obstacle: Option<Tick>,
    pub fire:          Option<Tick>,
    pub overload:      Option<Tick>,
    pub power_out:     Option<Tick>,
}

impl SafetyTriggers {
    /// No events configured.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, kind: SafetyEventKind, tick: Tick) -> Self {
        self.set(kind, Some(tick));
        self
    }

    pub fn get(&self, kind: SafetyEventKind) -> Option<Tick> {
        match kind {
            SafetyEventKind::Help         => self.help,
            SafetyEventKind::DoorObstacle => self.door_obstacle,
            SafetyEventKind::Fire         => self.fire,
            SafetyEventKind::Overload     => self.overload,
            SafetyEventKind::PowerOut     => self.power_out,
        }
    }

    pub fn set(&mut self, kind: SafetyEventKind, tick: Option<Tick>) {
        let slot = match kind {
            SafetyEventKind::Help         => &mut self.help,
            SafetyEventKind::DoorObstacle => &mut self.door_obstacle,
            SafetyEventKind::Fire         => &mut self.fire,
            SafetyEventKind::Overload     => &mut self.overload,
            SafetyEventKind::PowerOut     => &mut self.power_out,
        };
        *slot = tick;
    }

    /// Kinds whose trigger equals `tick`, in resolution order.
    pub fn due_at(&self, tick: Tick) -> impl Iterator<Item = SafetyEventKind> + '_ {
        SafetyEventKind::ALL
            .into_iter()
            .filter(move |&kind| self.get(kind) == Some(tick))
    }

    /// Configured `(kind, trigger)` pairs in resolution order.
    pub fn configured(&self) -> impl Iterator<Item = (SafetyEventKind, Tick)> + '_ {
        SafetyEventKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|t| (kind, t)))
    }

    pub fn is_empty(&self) -> bool {
        self.configured().next().is_none()
    }
}
