//! Strongly typed, zero-cost index wrappers.
//!
//! All ids are `Copy + Ord + Hash` so they can be used as set members and
//! sorted collection elements without ceremony.  The inner integer is `pub`
//! so narration can print it directly.

use std::fmt;

/// Generate a typed wrapper around a primitive integer.
macro_rules! typed_index {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_index! {
    /// A building floor.  Floors are numbered from 1 (the lobby) up to the
    /// configured floor count.
    pub struct Floor(u32);
}

typed_index! {
    /// Operator-assigned passenger number attached to scripted actions.
    pub struct PassengerId(u32);
}

typed_index! {
    /// Position of a passenger action within its `ActionSchedule`
    /// (insertion order, starting at 0).
    pub struct ActionId(u32);
}

impl Floor {
    /// The floor every run starts from.
    pub const LOBBY: Floor = Floor(1);

    /// Clamp into `[1, floor_count]`.
    ///
    /// A building with zero floors still clamps to the lobby so the elevator
    /// position is never undefined.
    #[inline]
    pub fn clamp_to(self, floor_count: u32) -> Floor {
        Floor(self.0.clamp(1, floor_count.max(1)))
    }

    /// `true` if `self` lies in `[1, floor_count]`.
    #[inline]
    pub fn is_within(self, floor_count: u32) -> bool {
        (1..=floor_count).contains(&self.0)
    }

    /// Every floor passed when moving one unit at a time from `self` to `to`,
    /// in travel order.  Excludes `self`, includes `to`; empty when equal.
    pub fn path_to(self, to: Floor) -> Vec<Floor> {
        if to.0 > self.0 {
            (self.0 + 1..=to.0).map(Floor).collect()
        } else {
            (to.0..self.0).rev().map(Floor).collect()
        }
    }
}

impl Default for Floor {
    /// The lobby.
    #[inline(always)]
    fn default() -> Self {
        Self::LOBBY
    }
}
