//! `ActionSchedule`: the scripted passenger actions for one scenario.

use log::warn;

use lift_core::{ActionId, Tick};

use crate::{PassengerAction, ScheduleError, ScheduleResult};

/// Most actions one schedule can hold; every position must fit an `ActionId`.
pub const MAX_ACTIONS: usize = u32::MAX as usize;

/// Insertion-ordered list of scripted passenger actions.
///
/// Several actions may share a time step; they are dispatched in insertion
/// order.  Lookups are a linear scan, which is fine for hand-written
/// scenarios of a few dozen entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSchedule {
    actions: Vec<PassengerAction>,
    limit:   usize,
}

impl Default for ActionSchedule {
    fn default() -> Self {
        Self { actions: Vec::new(), limit: MAX_ACTIONS }
    }
}

impl ActionSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_limit(limit: usize) -> Self {
        Self { actions: Vec::new(), limit: limit.min(MAX_ACTIONS) }
    }

    /// Append an action and return its id.
    ///
    /// Fails with [`ScheduleError::Full`] once the schedule holds
    /// [`MAX_ACTIONS`] entries.
    pub fn push(&mut self, action: PassengerAction) -> ScheduleResult<ActionId> {
        let len = self.actions.len();
        if len >= self.limit {
            return Err(ScheduleError::Full(self.limit));
        }
        let id = ActionId::try_from(len).map_err(|_| ScheduleError::Full(self.limit))?;
        self.actions.push(action);
        Ok(id)
    }

    pub fn get(&self, id: ActionId) -> Option<&PassengerAction> {
        self.actions.get(id.index())
    }

    /// Read-only slice of all actions in insertion order.
    pub fn actions(&self) -> &[PassengerAction] {
        &self.actions
    }

    /// Every action whose `time_step` equals `tick`, with its id, in
    /// insertion order.
    pub fn due_at(&self, tick: Tick) -> impl Iterator<Item = (ActionId, &PassengerAction)> + '_ {
        self.actions
            .iter()
            .enumerate()
            .filter(move |(_, a)| a.time_step == tick)
            .filter_map(|(i, a)| ActionId::try_from(i).ok().map(|id| (id, a)))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl FromIterator<PassengerAction> for ActionSchedule {
    /// Collects up to [`MAX_ACTIONS`] entries; the rest are dropped with a
    /// warning.
    fn from_iter<I: IntoIterator<Item = PassengerAction>>(iter: I) -> Self {
        let mut schedule = Self::new();
        for action in iter {
            if let Err(e) = schedule.push(action) {
                warn!("{e}; dropping remaining actions");
                break;
            }
        }
        schedule
    }
}
