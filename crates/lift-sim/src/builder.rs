//! Fluent builder for constructing a [`Sim`].

use log::warn;

use lift_behavior::BehaviorModel;
use lift_core::{BuildingConfig, SafetyTriggers, SimConfig, SimRng};
use lift_schedule::ActionSchedule;

use crate::{Scenario, Sim, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: tick interval and optional seed
/// - `B: BehaviorModel`: fills ticks that have no scripted action
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                  |
/// |------------------|------------------------------------------|
/// | `.building(b)`   | `BuildingConfig::default()` (empty)      |
/// | `.triggers(t)`   | `SafetyTriggers::none()`                 |
/// | `.schedule(s)`   | empty `ActionSchedule`                   |
/// | `.rng(r)`        | `config.make_rng()`                      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), RandomBehavior)
///     .building(BuildingConfig::new(2, 5))
///     .triggers(SafetyTriggers::none().with(SafetyEventKind::PowerOut, Tick(2)))
///     .build()?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:   SimConfig,
    scenario: Scenario,
    behavior: B,
    rng:      Option<SimRng>,
}

impl<B: BehaviorModel> SimBuilder<B> {
    pub fn new(config: SimConfig, behavior: B) -> Self {
        Self { config, scenario: Scenario::default(), behavior, rng: None }
    }

    pub fn building(mut self, building: BuildingConfig) -> Self {
        self.scenario.building = building;
        self
    }

    pub fn triggers(mut self, triggers: SafetyTriggers) -> Self {
        self.scenario.triggers = triggers;
        self
    }

    pub fn schedule(mut self, schedule: ActionSchedule) -> Self {
        self.scenario.schedule = schedule;
        self
    }

    /// Replace building, triggers, and schedule in one go.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }

    /// Use a caller-supplied generator instead of one derived from
    /// `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration and return a stopped [`Sim`].
    ///
    /// Scheduled floors outside the building are allowed (they are clamped
    /// when dispatched) but logged here.
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;

        let floor_count = self.scenario.building.floor_count;
        for action in self.scenario.schedule.actions() {
            if !action.floor.is_within(floor_count) {
                warn!(
                    "{} at time step {} targets floor {} outside 1..={floor_count}",
                    action.kind, action.time_step.0, action.floor
                );
            }
        }

        let rng = self.rng.unwrap_or_else(|| self.config.make_rng());
        Ok(Sim::from_parts(self.config, self.scenario, self.behavior, rng))
    }
}
