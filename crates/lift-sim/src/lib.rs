//! `lift-sim`: tick scheduler for the lift simulator.
//!
//! # One tick
//!
//! ```text
//! on_tick():
//!   ① Advance     clock += 1 (tick 0 is run by start() itself).
//!   ② Scripted    every unprocessed PassengerAction with time_step == tick,
//!                 in schedule order; each is marked processed.
//!   ③ Synthesis   if nothing matched (and tick > 0): BehaviorModel proposes
//!                 a request/exit pair, executed like scripted actions.
//!   ④ Safety      triggers equal to tick, in fixed precedence
//!                 Help → DoorObstacle → Fire → Overload → PowerOut.
//!   ⑤ Complete?   completed >= total ends the run and resets live state.
//! ```
//!
//! Steps ②–④ stop dispatching the moment every passenger has completed.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_behavior::RandomBehavior;
//! use lift_core::{BuildingConfig, SimConfig};
//! use lift_sim::{SimBuilder, Transcript};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), RandomBehavior)
//!     .building(BuildingConfig::new(3, 5))
//!     .build()?;
//! let mut narration = Transcript::new();
//! let summary = sim.run_to_completion(&mut narration, 1_000);
//! ```

pub mod builder;
pub mod completion;
pub mod elevator;
pub mod error;
pub mod observer;
pub mod safety;
pub mod scenario;
pub mod sim;


pub use builder::SimBuilder;
pub use completion::Completion;
pub use elevator::{Elevator, Motion};
pub use error::{SimError, SimResult};
pub use observer::{NarrationSink, NoopSink, SEPARATOR, TickReport, Transcript};
pub use safety::SafetyOutcome;
pub use scenario::Scenario;
pub use sim::{EndReason, RunSummary, Sim, StepOutcome};
