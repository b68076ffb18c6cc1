//! The `Sim` struct and its tick loop.

use std::fmt;

use log::{debug, info, warn};

use lift_behavior::{BehaviorContext, BehaviorModel};
use lift_core::{RunState, SafetyEventKind, SimClock, SimConfig, SimRng, Tick};
use lift_schedule::{ActionKind, PassengerAction, ProcessedActions};

use crate::{Completion, Elevator, NarrationSink, Scenario, SEPARATOR, TickReport, safety};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Why a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// Every passenger reached a destination.
    AllArrived,
    /// The building has no floors; passengers can never be served.
    NoFloors,
    /// `stop()` was called on an active run.
    Stopped,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EndReason::AllArrived => "all passengers arrived",
            EndReason::NoFloors   => "no floors",
            EndReason::Stopped    => "stopped",
        };
        f.write_str(s)
    }
}

/// Final state of one run, captured before live state is reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub final_tick: Tick,
    pub completed:  u32,
    pub total:      u32,
    pub reason:     EndReason,
}

/// Result of one scheduler call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Wrong state for the call; nothing happened.
    Ignored,
    /// `tick` was processed and the run continues.
    Advanced { tick: Tick },
    /// The run ended and live state has been reset.
    Finished(RunSummary),
}

impl StepOutcome {
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, StepOutcome::Finished(_))
    }

    pub fn summary(&self) -> Option<RunSummary> {
        match self {
            StepOutcome::Finished(s) => Some(*s),
            _ => None,
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// `Sim<B>` owns every piece of per-run state (clock, car, completion
/// counter, processed-action set) plus the single [`SimRng`] shared by the
/// behavior model and the safety resolver.  Nothing is global.
///
/// Two scenarios are held: the *source* one, freely editable through
/// [`scenario_mut`][Self::scenario_mut], and the *active* snapshot taken by
/// [`start`][Self::start] which the run actually reads.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    config:     SimConfig,
    clock:      SimClock,
    elevator:   Elevator,
    completion: Completion,
    processed:  ProcessedActions,
    behavior:   B,
    rng:        SimRng,
    source:     Scenario,
    active:     Scenario,
    last_run:   Option<RunSummary>,
}

impl<B: BehaviorModel> Sim<B> {
    pub(crate) fn from_parts(config: SimConfig, scenario: Scenario, behavior: B, rng: SimRng) -> Self {
        let building = scenario.building;
        Self {
            config,
            clock:      SimClock::new(),
            elevator:   Elevator::new(building.floor_count),
            completion: Completion::new(building.passenger_count),
            processed:  ProcessedActions::new(),
            behavior,
            rng,
            source:     scenario.clone(),
            active:     scenario,
            last_run:   None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.clock.state()
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    pub fn completion(&self) -> &Completion {
        &self.completion
    }

    pub fn processed(&self) -> &ProcessedActions {
        &self.processed
    }

    /// The editable scenario the next `start()` will snapshot.
    pub fn scenario(&self) -> &Scenario {
        &self.source
    }

    /// Edits apply from the next `start()`; a run in progress keeps its
    /// snapshot.
    pub fn scenario_mut(&mut self) -> &mut Scenario {
        &mut self.source
    }

    /// The snapshot the current (or most recent) run reads.
    pub fn active_scenario(&self) -> &Scenario {
        &self.active
    }

    /// Summary of the most recently ended run.
    pub fn last_run(&self) -> Option<RunSummary> {
        self.last_run
    }

    // ── Scheduler ─────────────────────────────────────────────────────────

    /// Begin a run and process tick 0.
    ///
    /// Only valid from `Stopped`.  Snapshots the scenario, resets all live
    /// state, and narrates the setup.  A building with no floors or no
    /// passengers finishes here without any tick elapsing.
    pub fn start<N: NarrationSink + ?Sized>(&mut self, sink: &mut N) -> StepOutcome {
        if self.clock.running {
            debug!("start ignored: simulation is {}", self.clock.state());
            return StepOutcome::Ignored;
        }

        self.active = self.source.clone();
        self.reset_run();
        self.clock.running = true;
        info!("simulation started: {}", self.active.building);

        sink.emit("Simulation started.");
        for line in self.active.describe() {
            sink.emit(&line);
        }
        sink.emit(SEPARATOR);
        sink.emit("Running Simulation...");
        if self.active.schedule.is_empty() {
            sink.emit("No actions in the action list.");
        }

        if self.active.building.floor_count == 0 || self.completion.is_complete() {
            return self.finish(sink);
        }

        self.step(sink);
        if self.completion.is_complete() {
            return self.finish(sink);
        }
        StepOutcome::Advanced { tick: self.clock.current_tick }
    }

    /// Advance one tick and process it.  Ignored unless running and not
    /// paused.  Ends the run as soon as every passenger has completed.
    pub fn on_tick<N: NarrationSink + ?Sized>(&mut self, sink: &mut N) -> StepOutcome {
        if !self.clock.is_ticking() {
            return StepOutcome::Ignored;
        }
        if self.completion.is_complete() {
            return self.finish(sink);
        }

        self.clock.advance();
        self.step(sink);

        if self.completion.is_complete() {
            return self.finish(sink);
        }
        StepOutcome::Advanced { tick: self.clock.current_tick }
    }

    /// `Running` → `Paused`.  Returns `false` in any other state.
    pub fn pause<N: NarrationSink + ?Sized>(&mut self, sink: &mut N) -> bool {
        if self.clock.state() != RunState::Running {
            return false;
        }
        self.clock.paused = true;
        debug!("paused at {}", self.clock.current_tick);
        sink.emit("Simulation paused.");
        true
    }

    /// `Paused` → `Running`.  Returns `false` in any other state.
    pub fn resume<N: NarrationSink + ?Sized>(&mut self, sink: &mut N) -> bool {
        if self.clock.state() != RunState::Paused {
            return false;
        }
        self.clock.paused = false;
        debug!("resumed at {}", self.clock.current_tick);
        sink.emit("Simulation resumed.");
        true
    }

    /// Halt and reset all live state.  Valid from any state; returns `true`
    /// (and records a [`RunSummary`]) only if a run was active.
    pub fn stop<N: NarrationSink + ?Sized>(&mut self, sink: &mut N) -> bool {
        let was_active = self.clock.running;
        if was_active {
            let summary = self.summary(EndReason::Stopped);
            info!(
                "simulation stopped at {} with {}/{} passengers complete",
                summary.final_tick, summary.completed, summary.total
            );
            sink.emit("Simulation stopped.");
            sink.on_sim_end(&summary);
            self.last_run = Some(summary);
        }
        self.reset_run();
        was_active
    }

    /// Deliver up to `n` ticks back-to-back.  Returns the last outcome;
    /// stops early if the run finishes or ticks are not being accepted.
    pub fn run_ticks<N: NarrationSink + ?Sized>(&mut self, n: u64, sink: &mut N) -> StepOutcome {
        let mut outcome = StepOutcome::Ignored;
        for _ in 0..n {
            outcome = self.on_tick(sink);
            if !matches!(outcome, StepOutcome::Advanced { .. }) {
                break;
            }
        }
        outcome
    }

    /// Start (if stopped) and deliver ticks without delay until the run
    /// finishes.  Returns `None` if it is still going after `max_ticks`
    /// ticks, or if it is paused.
    pub fn run_to_completion<N: NarrationSink + ?Sized>(
        &mut self,
        sink:      &mut N,
        max_ticks: u64,
    ) -> Option<RunSummary> {
        if self.clock.state() == RunState::Stopped {
            if let StepOutcome::Finished(summary) = self.start(sink) {
                return Some(summary);
            }
        }
        for _ in 0..max_ticks {
            match self.on_tick(sink) {
                StepOutcome::Finished(summary) => return Some(summary),
                StepOutcome::Ignored => return None,
                StepOutcome::Advanced { .. } => {}
            }
        }
        warn!("run did not finish within {max_ticks} ticks");
        None
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Process the current tick: scripted actions, then synthesized ones,
    /// then safety triggers.  Dispatch stops once every passenger completes.
    fn step<N: NarrationSink + ?Sized>(&mut self, sink: &mut N) {
        let now = self.clock.current_tick;

        // ── Phase 1: scripted actions due now ─────────────────────────────
        let due: Vec<_> = self
            .active
            .schedule
            .due_at(now)
            .filter(|(id, _)| !self.processed.contains(*id))
            .map(|(id, action)| (id, *action))
            .collect();
        let scripted = !due.is_empty();

        for (id, action) in due {
            if self.completion.is_complete() {
                break;
            }
            self.processed.mark(id);
            sink.emit(SEPARATOR);
            self.execute(&action, &format!(" at time step {}", now.0), sink);
        }

        // ── Phase 2: synthesized passengers ───────────────────────────────
        //
        // Tick 0 only replays what was scripted for it.
        if !scripted && now > Tick::ZERO && !self.completion.is_complete() {
            let ctx = BehaviorContext::new(
                now,
                self.active.building.floor_count,
                self.elevator.floor(),
                self.completion.remaining(),
            );
            let synthesized = self.behavior.synthesize(&ctx, &mut self.rng);
            debug!("{now}: synthesized {} action(s)", synthesized.len());
            for action in synthesized {
                if self.completion.is_complete() {
                    break;
                }
                sink.emit(SEPARATOR);
                self.execute(&action, "", sink);
            }
        }

        // ── Phase 3: safety triggers ──────────────────────────────────────
        for kind in self.active.triggers.due_at(now) {
            if self.completion.is_complete() {
                debug!("{now}: {kind:?} skipped, run already complete");
                break;
            }
            safety::resolve(kind, &mut self.completion, &mut self.rng, sink);
        }

        sink.on_tick_end(&TickReport {
            tick:      now,
            floor:     self.elevator.floor(),
            motion:    self.elevator.motion(),
            completed: self.completion.completed(),
            total:     self.completion.total(),
        });
    }

    /// Carry out one passenger action.  `when` is appended to the action's
    /// narration line.
    fn execute<N: NarrationSink + ?Sized>(&mut self, action: &PassengerAction, when: &str, sink: &mut N) {
        let floor_count = self.active.building.floor_count;
        let floor = action.floor.clamp_to(floor_count);
        if floor != action.floor {
            warn!("{} floor {} outside 1..={floor_count}; clamped to {floor}", action.kind, action.floor);
        }

        let who = action.actor();
        self.elevator.announce(sink);
        match action.kind {
            ActionKind::RequestCar => {
                sink.emit(&format!("> {who} requested car at floor {floor}{when}."));
                self.elevator.travel_to(floor, sink);
                sink.emit(&format!("> {who} has entered the elevator."));
            }
            ActionKind::ExitCar => {
                if self.elevator.floor() != floor {
                    self.elevator.travel_to(floor, sink);
                }
                sink.emit(&format!("> {who} exited car at floor {floor}{when}."));
                self.completion.complete_one();
            }
            ActionKind::OpenDoor => {
                sink.emit(&format!("> Door opened at floor {floor}{when}."));
            }
            ActionKind::CloseDoor => {
                sink.emit(&format!("> Door closed at floor {floor}{when}."));
            }
            ActionKind::PushHelp => {
                sink.emit(&format!("> {who} pushed help button at floor {floor}{when}."));
                safety::resolve(SafetyEventKind::Help, &mut self.completion, &mut self.rng, sink);
            }
        }

        self.elevator.settle();
        self.elevator.announce(sink);
        sink.emit(&self.completion.to_string());
    }

    /// End the run: narrate, record the summary, reset live state.
    fn finish<N: NarrationSink + ?Sized>(&mut self, sink: &mut N) -> StepOutcome {
        let reason = if self.completion.is_complete() {
            EndReason::AllArrived
        } else {
            EndReason::NoFloors
        };
        let summary = self.summary(reason);

        sink.emit(SEPARATOR);
        match reason {
            EndReason::NoFloors => sink.emit("The building has no floors; no passenger can be served."),
            _ => sink.emit("All passengers have reached their destinations."),
        }
        sink.emit("Simulation Complete");
        info!(
            "simulation complete at {}: {}/{} passengers ({reason})",
            summary.final_tick, summary.completed, summary.total
        );

        sink.on_sim_end(&summary);
        self.last_run = Some(summary);
        self.reset_run();
        StepOutcome::Finished(summary)
    }

    fn summary(&self, reason: EndReason) -> RunSummary {
        RunSummary {
            final_tick: self.clock.current_tick,
            completed:  self.completion.completed(),
            total:      self.completion.total(),
            reason,
        }
    }

    fn reset_run(&mut self) {
        let building = self.active.building;
        self.clock.reset();
        self.elevator.reset(building.floor_count);
        self.completion.reset(building.passenger_count);
        self.processed.clear();
    }
}
