//! `lift-core`: foundational types for the lift simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `Floor`, `ActionId`, `PassengerId`                    |
//! | [`time`]        | `Tick`, `SimClock`, `RunState`                        |
//! | [`rng`]         | `SimRng` (the single run-wide generator)              |
//! | [`config`]      | `BuildingConfig`, `SimConfig`                         |
//! | [`safety`]      | `SafetyEventKind`, `SafetyTriggers`                   |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and config types.    |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod safety;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, SimConfig};
pub use error::{LiftError, LiftResult};
pub use ids::{ActionId, Floor, PassengerId};
pub use rng::SimRng;
pub use safety::{SafetyEventKind, SafetyTriggers};
pub use time::{RunState, SimClock, Tick};
