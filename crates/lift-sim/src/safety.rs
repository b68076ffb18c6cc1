//! Safety event resolution.
//!
//! Help, DoorObstacle, and Overload model one stuck passenger and always
//! complete exactly one; their coin flip only picks the narration.  Fire
//! evacuates either the whole building (heads) or one passenger (tails).
//! PowerOut always evacuates everyone and draws nothing from the RNG.

use log::debug;

use lift_core::{SafetyEventKind, SimRng};

use crate::{Completion, NarrationSink, SEPARATOR};

/// What resolving one safety event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SafetyOutcome {
    pub kind:   SafetyEventKind,
    /// The coin flip, or `None` for PowerOut.
    pub heads:  Option<bool>,
    pub before: u32,
    pub after:  u32,
}

/// Resolve one `kind` event against `completion`, narrating to `sink`.
pub fn resolve<N: NarrationSink + ?Sized>(
    kind:       SafetyEventKind,
    completion: &mut Completion,
    rng:        &mut SimRng,
    sink:       &mut N,
) -> SafetyOutcome {
    let before = completion.completed();
    sink.emit(SEPARATOR);

    let heads = match kind {
        SafetyEventKind::Help => {
            sink.emit("Help Alarm Triggered");
            sink.emit("> Stay calm, connecting passenger to building safety services.");
            let heads = rng.coin_flip();
            if heads {
                sink.emit("> Connected to building safety services. Please remain calm, help is on the way.");
            } else {
                sink.emit("> Unable to contact building safety services, 911 emergency call has been placed.");
            }
            completion.complete_one();
            Some(heads)
        }

        SafetyEventKind::DoorObstacle => {
            sink.emit("Door Obstacle Triggered by Light Sensors");
            sink.emit("Elevator doors remain open.");
            sink.emit("> Please remove the obstacle blocking the door!");
            let heads = rng.coin_flip();
            if heads {
                sink.emit("> Obstacle has been moved.");
            } else {
                sink.emit("> Obstacle has not been moved.");
                sink.emit("> Passengers are asked to disembark.");
            }
            completion.complete_one();
            Some(heads)
        }

        SafetyEventKind::Fire => {
            sink.emit("Fire Alarm Triggered");
            sink.emit("> Stay calm, moving the elevator(s) to a safe floor.");
            let heads = rng.coin_flip();
            if heads {
                sink.emit("> All elevators have reached a safe floor, please exit!");
                completion.complete_all();
            } else {
                sink.emit("> Elevator has reached a safe floor, please exit.");
                completion.complete_one();
            }
            Some(heads)
        }

        SafetyEventKind::Overload => {
            sink.emit("Overload Alarm Triggered");
            sink.emit("> Please reduce the weight load before the elevator proceeds.");
            let heads = rng.coin_flip();
            if heads {
                sink.emit("> Load has been moved, elevator will commence.");
            } else {
                sink.emit("> Elevator is still overloaded.");
                sink.emit("> Passengers are asked to disembark.");
            }
            completion.complete_one();
            Some(heads)
        }

        SafetyEventKind::PowerOut => {
            sink.emit("Power Out Alarm Triggered");
            sink.emit("> Stay calm, moving the elevators to a safe floor.");
            sink.emit("> All elevators have reached a safe floor, please exit!");
            completion.complete_all();
            None
        }
    };

    sink.emit("Elevator doors open (10 seconds).");
    sink.emit("Bell rings.");
    sink.emit("Elevator doors closed.");
    sink.emit(&completion.to_string());

    let after = completion.completed();
    debug!("{kind:?} resolved: heads={heads:?} completed {before} -> {after}");
    SafetyOutcome { kind, heads, before, after }
}
