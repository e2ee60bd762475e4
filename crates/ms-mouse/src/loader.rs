//! CSV population loader.
//!
//! # CSV format
//!
//! One row per mouse.  Rows keep their file order, which becomes the
//! driver's tick order.
//!
//! ```csv
//! mouse_id,start_x,start_y,goal_x,goal_y,strategy,max_steps,seed
//! 0,1,1,7,5,random,5000,
//! 1,1,1,7,5,wall,,
//! 2,1,5,7,1,random,,12345
//! ```
//!
//! | Column      | Meaning                                                  |
//! |-------------|----------------------------------------------------------|
//! | `strategy`  | `random` or `wall` (see [`Strategy`])                    |
//! | `max_steps` | optional step budget; empty = walk until the goal        |
//! | `seed`      | optional; empty = derived from the run seed and the ID   |
//!
//! Start and goal cells are not checked here; [`Mouse`][crate::Mouse]
//! validates them against the grid when it is set up.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use ms_core::{Cell, Grid, MouseId, agent_seed};

use crate::{MouseConfig, MouseError, MouseResult, Strategy};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PopulationRecord {
    mouse_id:  u32,
    start_x:   u32,
    start_y:   u32,
    goal_x:    u32,
    goal_y:    u32,
    strategy:  String,
    max_steps: Option<u64>,
    seed:      Option<u64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `(MouseId, MouseConfig)` pairs from a CSV file.
pub fn load_population_csv(
    path:        &Path,
    grid:        Arc<Grid>,
    global_seed: u64,
) -> MouseResult<Vec<(MouseId, MouseConfig)>> {
    let file = std::fs::File::open(path)?;
    load_population_reader(file, grid, global_seed)
}

/// Like [`load_population_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded data.
pub fn load_population_reader<R: Read>(
    reader:      R,
    grid:        Arc<Grid>,
    global_seed: u64,
) -> MouseResult<Vec<(MouseId, MouseConfig)>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut seen: HashSet<u32> = HashSet::new();
    let mut population = Vec::new();

    for result in csv_reader.deserialize::<PopulationRecord>() {
        let row = result.map_err(|e| MouseError::Parse(e.to_string()))?;
        if !seen.insert(row.mouse_id) {
            return Err(MouseError::Parse(format!(
                "duplicate mouse_id {}",
                row.mouse_id
            )));
        }

        let id = MouseId(row.mouse_id);
        let config = MouseConfig {
            grid:      Arc::clone(&grid),
            start:     Cell::new(row.start_x, row.start_y),
            goal:      Cell::new(row.goal_x, row.goal_y),
            strategy:  row.strategy.parse::<Strategy>()?,
            max_steps: row.max_steps,
            seed:      row.seed.unwrap_or_else(|| agent_seed(global_seed, id)),
        };
        population.push((id, config));
    }

    Ok(population)
}
