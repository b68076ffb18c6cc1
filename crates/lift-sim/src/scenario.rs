//! `Scenario`: everything a run reads from the outside world.

use lift_core::{BuildingConfig, SafetyTriggers};
use lift_schedule::ActionSchedule;

/// Building parameters, safety triggers, and scripted passenger actions.
///
/// `Sim` snapshots its scenario at `start()`; edits made while a run is in
/// progress apply from the next `start()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scenario {
    pub building: BuildingConfig,
    pub triggers: SafetyTriggers,
    pub schedule: ActionSchedule,
}

impl Scenario {
    pub fn new(building: BuildingConfig) -> Self {
        Self { building, ..Self::default() }
    }

    pub fn with_triggers(mut self, triggers: SafetyTriggers) -> Self {
        self.triggers = triggers;
        self
    }

    pub fn with_schedule(mut self, schedule: ActionSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// The setup snapshot narrated at the start of every run.
    ///
    /// Safety and passenger sections are omitted when empty.
    pub fn describe(&self) -> Vec<String> {
        let b = &self.building;
        let mut lines = vec![
            "Building Setup:".to_owned(),
            format!("> Passengers: {}", b.passenger_count),
            format!("> Floors: {}", b.floor_count),
            format!("> Elevators: {}", b.elevator_count),
        ];

        if !self.triggers.is_empty() {
            lines.push("Safety Event Setup:".to_owned());
            for (kind, tick) in self.triggers.configured() {
                lines.push(format!("> {} Trigger Time Step: {}", kind.label(), tick.0));
            }
        }

        if !self.schedule.is_empty() {
            lines.push("Passenger Behaviour Setup:".to_owned());
            for action in self.schedule.actions() {
                let who = match action.passenger {
                    Some(id) => format!("Passenger {id}: "),
                    None => String::new(),
                };
                lines.push(format!(
                    "> {who}{} at floor {}, time step {}",
                    action.kind, action.floor, action.time_step.0
                ));
            }
        }

        lines
    }
}
