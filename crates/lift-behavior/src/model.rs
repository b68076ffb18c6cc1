//! The `BehaviorModel` trait: the extension point for synthesized passengers.

use lift_core::SimRng;
use lift_schedule::PassengerAction;

use crate::BehaviorContext;

/// Pluggable passenger synthesis.
///
/// Called at most once per tick, and only on ticks where no scripted action
/// matched and passengers remain.  The returned actions are executed in order.
///
/// # Termination
///
/// The simulation only ends when every passenger completes.  A model that
/// returns actions which never complete a passenger (no `ExitCar`) can keep a
/// run going forever, so implementations should complete at least one
/// passenger per call.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysTopFloor;
///
/// impl BehaviorModel for AlwaysTopFloor {
///     fn synthesize(&self, ctx: &BehaviorContext, _rng: &mut SimRng) -> Vec<PassengerAction> {
///         vec![
///             PassengerAction::new(ActionKind::RequestCar, Floor::LOBBY, ctx.tick),
///             PassengerAction::new(ActionKind::ExitCar, Floor(ctx.floor_count), ctx.tick),
///         ]
///     }
/// }
/// ```
pub trait BehaviorModel: Send + 'static {
    fn synthesize(&self, ctx: &BehaviorContext, rng: &mut SimRng) -> Vec<PassengerAction>;
}
