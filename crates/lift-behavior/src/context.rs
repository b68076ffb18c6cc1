//! Read-only simulation state passed to every behavior call.

use lift_core::{Floor, Tick};

/// A read-only snapshot of the simulation handed to
/// [`BehaviorModel::synthesize`][crate::BehaviorModel::synthesize].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BehaviorContext {
    /// Current simulation tick.
    pub tick: Tick,

    /// Floors in the building (`1..=floor_count`).
    pub floor_count: u32,

    /// Where the car is right now.
    pub car_floor: Floor,

    /// Passengers still travelling (`total - completed`).
    pub remaining: u32,
}

impl BehaviorContext {
    #[inline]
    pub fn new(tick: Tick, floor_count: u32, car_floor: Floor, remaining: u32) -> Self {
        Self { tick, floor_count, car_floor, remaining }
    }
}
