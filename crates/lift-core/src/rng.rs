//! The run-wide random number generator.
//!
//! # Determinism strategy
//!
//! One `SmallRng` is created when the simulation is built and then threaded
//! by `&mut` through every consumer: the random passenger generator and the
//! safety event resolver draw from the same stream.  It is never reseeded,
//! not even when a run is stopped and started again.
//!
//! With `SimConfig::seed = Some(s)` the whole process is reproducible; with
//! `None` the generator is seeded once from OS entropy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Floor;

/// Simulation-level RNG shared by passenger synthesis and safety resolution.
///
/// Used only from the single tick thread.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed once from OS entropy.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// A fair coin flip.
    #[inline]
    pub fn coin_flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    /// A uniformly random floor in `[1, floor_count]`.
    ///
    /// Returns the lobby without drawing when `floor_count <= 1`.
    pub fn floor(&mut self, floor_count: u32) -> Floor {
        if floor_count <= 1 {
            return Floor::LOBBY;
        }
        Floor(self.0.gen_range(1..=floor_count))
    }

    /// A uniformly random floor in `[1, floor_count]` other than `except`.
    ///
    /// Draws from the `floor_count - 1` remaining floors, so the result is
    /// uniform over them.  Returns `except` when there is no other floor.
    pub fn floor_except(&mut self, floor_count: u32, except: Floor) -> Floor {
        if floor_count <= 1 {
            return Floor::LOBBY;
        }
        if !except.is_within(floor_count) {
            return self.floor(floor_count);
        }
        let n = self.0.gen_range(1..floor_count);
        if n >= except.0 { Floor(n + 1) } else { Floor(n) }
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SimRng")
    }
}
