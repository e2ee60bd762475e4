//! Per-mouse construction payload.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ms_core::{Cell, Grid};

use crate::MouseError;

/// How a mouse picks its next cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Strategy {
    /// Uniformly random open neighbour each tick.
    #[default]
    RandomWalk,
    /// Right-hand rule: prefer right, then straight, then left, then back.
    WallFollower,
}

impl Strategy {
    /// Label used in population files.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::RandomWalk   => "random",
            Strategy::WallFollower => "wall",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = MouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "random" => Ok(Strategy::RandomWalk),
            "wall"   => Ok(Strategy::WallFollower),
            other => Err(MouseError::Parse(format!(
                "invalid strategy {other:?}: expected \"random\" or \"wall\""
            ))),
        }
    }
}

/// Everything needed to build one [`Mouse`][crate::Mouse].
///
/// The grid is shared by every mouse of a run; cloning a config only bumps
/// the `Arc`.
#[derive(Clone, Debug)]
pub struct MouseConfig {
    pub grid:      Arc<Grid>,
    pub start:     Cell,
    pub goal:      Cell,
    pub strategy:  Strategy,
    /// Give up after this many moves.  `None` means walk until the goal is
    /// reached, which never terminates if the goal is unreachable.
    pub max_steps: Option<u64>,
    /// Seed for the mouse's own RNG.
    pub seed:      u64,
}

impl MouseConfig {
    /// A random-walk mouse with no step budget and seed 0.
    pub fn new(grid: Arc<Grid>, start: Cell, goal: Cell) -> Self {
        Self {
            grid,
            start,
            goal,
            strategy:  Strategy::default(),
            max_steps: None,
            seed:      0,
        }
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
