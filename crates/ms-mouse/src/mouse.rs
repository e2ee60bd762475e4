//! The `Mouse` agent.

use std::sync::Arc;

use ms_agent::Agent;
use ms_core::{AgentRng, Cell, Direction, Grid};

use crate::{HeatMap, MouseConfig, MouseError, MouseResult, Strategy};

/// A single mouse walking a shared grid.
///
/// The start cell counts as the first path entry and the first heat visit;
/// each tick then moves exactly one cell and records it in both.
#[derive(Clone, Debug)]
pub struct Mouse {
    grid:      Arc<Grid>,
    goal:      Cell,
    strategy:  Strategy,
    max_steps: Option<u64>,
    position:  Cell,
    heading:   Direction,
    steps:     u64,
    path:      Vec<Cell>,
    heat:      HeatMap,
    rng:       AgentRng,
}

impl Mouse {
    #[inline]
    pub fn position(&self) -> Cell {
        self.position
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Moves taken so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// `true` if the mouse stopped because it stands on its goal, as opposed
    /// to running out of steps.
    #[inline]
    pub fn reached_goal(&self) -> bool {
        self.position == self.goal
    }

    /// Pick the next heading and cell, or `None` when boxed in.
    fn choose_move(&mut self) -> Option<(Direction, Cell)> {
        match self.strategy {
            Strategy::RandomWalk => {
                let options: Vec<(Direction, Cell)> =
                    self.grid.open_neighbours(self.position).collect();
                self.rng.choose(&options).copied()
            }
            Strategy::WallFollower => {
                let h = self.heading;
                [h.turn_right(), h, h.turn_left(), h.reverse()]
                    .into_iter()
                    .find_map(|d| self.grid.neighbour(self.position, d).map(|c| (d, c)))
            }
        }
    }
}

impl Agent for Mouse {
    type Config   = MouseConfig;
    type Position = Cell;
    type Heat     = HeatMap;
    type Error    = MouseError;

    fn set_up(config: MouseConfig) -> MouseResult<Self> {
        config.grid.check_open(config.start)?;
        config.grid.check_open(config.goal)?;

        let mut heat = HeatMap::for_grid(&config.grid);
        heat.visit(config.start);

        Ok(Self {
            goal:      config.goal,
            strategy:  config.strategy,
            max_steps: config.max_steps,
            position:  config.start,
            heading:   Direction::North,
            steps:     0,
            path:      vec![config.start],
            heat,
            rng:       AgentRng::from_seed(config.seed),
            grid:      config.grid,
        })
    }

    fn is_done(&self) -> bool {
        self.reached_goal() || self.max_steps.is_some_and(|max| self.steps >= max)
    }

    fn tick(&mut self) -> MouseResult<()> {
        if self.is_done() {
            return Err(MouseError::AlreadyDone);
        }
        let (heading, next) = self
            .choose_move()
            .ok_or(MouseError::Trapped(self.position))?;

        self.heading = heading;
        self.position = next;
        self.steps += 1;
        self.path.push(next);
        self.heat.visit(next);
        Ok(())
    }

    fn path(&self) -> &[Cell] {
        &self.path
    }

    fn heat_data(&self) -> HeatMap {
        self.heat.clone()
    }
}
