//! TOML scenario files.
//!
//! ```toml
//! [building]
//! passenger_count = 2
//! floor_count     = 5
//!
//! [simulation]
//! tick_interval_ms = 500
//! seed             = 42
//!
//! [safety]
//! power_out = 2
//!
//! [[actions]]
//! kind      = "RequestCar"
//! floor     = 3
//! time_step = 1
//! passenger = 1      # optional
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;

use lift_core::{BuildingConfig, Floor, PassengerId, SafetyTriggers, SimConfig, Tick};
use lift_schedule::{ActionKind, ActionSchedule, PassengerAction};
use lift_sim::Scenario;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ScenarioFile {
    pub building:   BuildingConfig,
    pub simulation: SimConfig,
    pub safety:     SafetyTriggers,
    pub actions:    Vec<ActionConfig>,
}

/// One `[[actions]]` entry.  `kind` stays a string here so a typo skips one
/// action instead of rejecting the whole file.
#[derive(Deserialize, Debug, Clone)]
pub struct ActionConfig {
    pub kind:      String,
    pub floor:     u32,
    pub time_step: u64,
    #[serde(default)]
    pub passenger: Option<PassengerId>,
}

impl ScenarioFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse scenario file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Split into the run settings and the scenario the simulator reads.
    pub fn into_parts(self) -> (SimConfig, Scenario) {
        let schedule: ActionSchedule = self
            .actions
            .iter()
            .filter_map(|a| match a.kind.parse::<ActionKind>() {
                Ok(kind) => {
                    let action = PassengerAction::new(kind, Floor(a.floor), Tick(a.time_step));
                    Some(match a.passenger {
                        Some(id) => action.with_passenger(id),
                        None => action,
                    })
                }
                Err(e) => {
                    warn!("skipping action at time step {}: {e}", a.time_step);
                    None
                }
            })
            .collect();

        let scenario = Scenario::new(self.building)
            .with_triggers(self.safety)
            .with_schedule(schedule);
        (self.simulation, scenario)
    }
}
