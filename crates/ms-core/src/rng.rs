//! Deterministic per-agent RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each mouse gets its own independent `SmallRng`.  When the population file
//! does not pin a seed, one is derived from:
//!
//!   seed = global_seed XOR (mouse_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive IDs uniformly across the seed space.  Mice never
//! share RNG state, so the order in which the driver ticks them has no
//! influence on any single mouse's trajectory.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::MouseId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Derive the per-mouse seed from the run's global seed.
#[inline]
pub fn agent_seed(global_seed: u64, mouse: MouseId) -> u64 {
    global_seed ^ (mouse.0 as u64).wrapping_mul(MIXING_CONSTANT)
}

/// Per-agent deterministic RNG.
///
/// Owned by the agent it drives; the type is `!Sync` to prevent accidental
/// sharing.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and a mouse ID.
    pub fn new(global_seed: u64, mouse: MouseId) -> Self {
        Self::from_seed(agent_seed(global_seed, mouse))
    }

    /// Seed from an already-mixed per-agent seed.
    pub fn from_seed(seed: u64) -> Self {
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
