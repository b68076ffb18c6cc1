//! The default passenger generator.

use lift_core::SimRng;
use lift_schedule::{ActionKind, PassengerAction};

use crate::{BehaviorContext, BehaviorModel};

/// Synthesizes one complete journey per call: a `RequestCar` to a uniformly
/// random floor followed by an `ExitCar` to a different uniformly random
/// floor.
///
/// In a one-floor building the exit floor equals the request floor.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomBehavior;

impl BehaviorModel for RandomBehavior {
    fn synthesize(&self, ctx: &BehaviorContext, rng: &mut SimRng) -> Vec<PassengerAction> {
        if ctx.remaining == 0 {
            return vec![];
        }
        let pickup = rng.floor(ctx.floor_count);
        let dropoff = rng.floor_except(ctx.floor_count, pickup);
        vec![
            PassengerAction::new(ActionKind::RequestCar, pickup, ctx.tick),
            PassengerAction::new(ActionKind::ExitCar, dropoff, ctx.tick),
        ]
    }
}
