//! Simulation time model.
//!
//! # Design
//!
//! Time is a single monotonically increasing `Tick` counter owned by the
//! driver.  Agents never see it; they only ever advance one step per call.
//! Using an integer tick keeps all arithmetic exact and comparisons O(1).

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at a billion ticks per second it still lasts ~585 years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Largest representable tick.  The clock stops here instead of wrapping.
    pub const MAX: Tick = Tick(u64::MAX);

    /// Return the tick `n` steps after `self`, saturating at [`Tick::MAX`].
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }

    /// `true` when this tick falls on a multiple of `interval`.
    ///
    /// An `interval` of zero never matches.
    #[inline]
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The driver's shared logical clock.
///
/// `SimClock` holds no heap data.  It only moves forward; [`reset`] is the
/// one way back to zero and is reserved for re-configuring the driver.
///
/// [`reset`]: SimClock::reset
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by the driver each step.
    pub current_tick: Tick,
}

impl SimClock {
    /// A clock at tick zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.offset(1);
    }

    /// Advance the clock by `n` ticks at once.
    ///
    /// Saturates at [`Tick::MAX`], so the clock never moves backwards.
    #[inline]
    pub fn advance_by(&mut self, n: u64) {
        self.current_tick = self.current_tick.offset(n);
    }

    /// Return to tick zero.
    #[inline]
    pub fn reset(&mut self) {
        self.current_tick = Tick::ZERO;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Default spacing between progress observations.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON run file by the application crate and passed
/// to the driver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  Mice without an explicit seed derive theirs from it.
    pub seed: u64,

    /// Emit a progress observation every N ticks (tick 0 included).
    /// 0 disables progress observations.
    pub progress_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                    0,
            progress_interval_ticks: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SimConfig {
    /// `true` if a progress observation is due at `tick`.
    #[inline]
    pub fn progress_due(&self, tick: Tick) -> bool {
        tick.is_multiple_of(self.progress_interval_ticks)
    }
}
