//! Simulation observer trait for progress reporting.

use std::fmt;

use ms_core::Tick;
use tracing::{debug, info};

/// Which entry point finished a run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RunMode {
    /// [`Sim::run_full_sim`][crate::Sim::run_full_sim]: all agents in lockstep.
    Lockstep,
    /// [`Sim::run_new_sim`][crate::Sim::run_new_sim]: each agent ran alone.
    Delegated,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunMode::Lockstep  => "lockstep",
            RunMode::Delegated => "delegated",
        })
    }
}

/// Callbacks invoked by the driver at key points of a run.
///
/// Purely diagnostic: nothing an observer does can change the simulation.
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_progress(&mut self, tick: Tick) {
///         println!("{}", tick.0);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of a step whose tick is a multiple of the
    /// configured progress interval.
    fn on_progress(&mut self, _tick: Tick) {}

    /// Called at the end of each lockstep step.
    ///
    /// `advanced` is the number of agents that were ticked; the clock has
    /// already moved on to `tick + 1`.
    fn on_tick_end(&mut self, _tick: Tick, _advanced: usize) {}

    /// Called once when a run entry point returns successfully.
    fn on_sim_end(&mut self, _mode: RunMode, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call a run
/// method but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Line printed above and below the delegated-run completion message.
pub const BANNER_RULE: &str = "*************************************";

/// A [`SimObserver`] that renders progress through `tracing`.
///
/// Progress values and run completion go out at `info`; per-step counts at
/// `debug`.  A delegated run ends with a framed banner.
#[derive(Default)]
pub struct LogObserver {
    steps: u64,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lockstep steps seen so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl SimObserver for LogObserver {
    fn on_progress(&mut self, tick: Tick) {
        info!(tick = tick.0, "simulation progress");
    }

    fn on_tick_end(&mut self, tick: Tick, advanced: usize) {
        self.steps += 1;
        debug!(tick = tick.0, advanced, "step complete");
    }

    fn on_sim_end(&mut self, mode: RunMode, final_tick: Tick) {
        match mode {
            RunMode::Lockstep => {
                info!(%mode, final_tick = final_tick.0, steps = self.steps, "all agents done");
            }
            RunMode::Delegated => {
                info!("{BANNER_RULE}");
                info!("I'm done simming.");
                info!("{BANNER_RULE}");
            }
        }
    }
}
