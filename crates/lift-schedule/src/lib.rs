//! `lift-schedule`: scripted passenger actions and their dispatch bookkeeping.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`action`]    | `ActionKind`, `PassengerAction`                           |
//! | [`schedule`]  | `ActionSchedule` (insertion-ordered, matched by tick)     |
//! | [`processed`] | `ProcessedActions` (per-run set of dispatched `ActionId`s)|
//! | [`loader`]    | `load_actions_csv`, `load_actions_reader`                 |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Matching model (summary)
//!
//! At tick `t` the simulation asks the schedule for every action whose
//! `time_step == t`, in insertion order, and skips those already recorded in
//! `ProcessedActions`.  Each dispatched action is recorded so it can never be
//! executed twice in one run.

pub mod action;
pub mod error;
pub mod loader;
pub mod processed;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use action::{ActionKind, PassengerAction};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_actions_csv, load_actions_reader};
pub use processed::ProcessedActions;
pub use schedule::{ActionSchedule, MAX_ACTIONS};
