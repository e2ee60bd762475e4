//! A reference agent that finishes after a fixed number of ticks.

use std::convert::Infallible;

use ms_core::Tick;

use crate::Agent;

/// An [`Agent`] that is done after exactly `ticks` calls to `tick`.
///
/// Its path is the local step index after each tick, starting with
/// `Tick(0)`, and its heat data is the number of ticks taken.  Useful as a
/// placeholder in tests or for timing the driver itself without any
/// movement logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
    steps:     Vec<Tick>,
}

impl Countdown {
    /// Ticks still needed before the agent is done.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Agent for Countdown {
    type Config   = u64;
    type Position = Tick;
    type Heat     = u64;
    type Error    = Infallible;

    fn set_up(ticks: u64) -> Result<Self, Infallible> {
        Ok(Self { remaining: ticks, steps: vec![Tick::ZERO] })
    }

    fn is_done(&self) -> bool {
        self.remaining == 0
    }

    fn tick(&mut self) -> Result<(), Infallible> {
        // Saturate so a stray extra tick stays harmless.
        if self.remaining > 0 {
            self.remaining -= 1;
            let next = self.steps.len() as u64;
            self.steps.push(Tick(next));
        }
        Ok(())
    }

    fn path(&self) -> &[Tick] {
        &self.steps
    }

    fn heat_data(&self) -> u64 {
        self.steps.len() as u64 - 1
    }
}
