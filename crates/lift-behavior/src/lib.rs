//! `lift-behavior`: synthesized passenger behavior.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`context`] | `BehaviorContext`: read-only tick snapshot                     |
//! | [`model`]   | `BehaviorModel` trait                                           |
//! | [`random`]  | `RandomBehavior`: one request/exit pair per call               |
//!
//! # Design notes
//!
//! When a tick has no scripted action, lift-sim asks its `BehaviorModel` to
//! fill the gap.  The model only *proposes* `PassengerAction`s; the
//! simulation executes them exactly like scripted ones.  All randomness comes
//! from the `SimRng` passed in, so a seeded run stays reproducible.

pub mod context;
pub mod model;
pub mod random;


pub use context::BehaviorContext;
pub use model::BehaviorModel;
pub use random::RandomBehavior;
