//! `ProcessedActions`: which scheduled actions a run has already dispatched.
//!
//! Owned by the simulation run and cleared on every start and stop, so a
//! restarted run replays the full schedule.

use std::collections::HashSet;

use lift_core::ActionId;

#[derive(Clone, Debug, Default)]
pub struct ProcessedActions {
    inner: HashSet<ActionId>,
}

impl ProcessedActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as dispatched.  Returns `false` if it already was.
    pub fn mark(&mut self, id: ActionId) -> bool {
        self.inner.insert(id)
    }

    pub fn contains(&self, id: ActionId) -> bool {
        self.inner.contains(&id)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
