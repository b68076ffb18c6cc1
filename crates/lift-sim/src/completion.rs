//! Passenger completion tracking: the run's only termination condition.

use std::fmt;

/// `completed` out of `total` passengers have reached a destination.
///
/// `completed` never exceeds `total`; every increment saturates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Completion {
    completed: u32,
    total:     u32,
}

impl Completion {
    pub fn new(total: u32) -> Self {
        Self { completed: 0, total }
    }

    #[inline]
    pub fn completed(&self) -> u32 {
        self.completed
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.total - self.completed
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }

    /// One more passenger arrived.  Returns `false` if everyone already had.
    pub fn complete_one(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.completed += 1;
        true
    }

    /// Everyone still travelling arrives at once.
    pub fn complete_all(&mut self) {
        self.completed = self.total;
    }

    pub fn reset(&mut self, total: u32) {
        *self = Self::new(total);
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Completed passengers: {}/{}", self.completed, self.total)
    }
}
