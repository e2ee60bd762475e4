//! Flatten aggregated maps into rows and hand them to a writer.

use std::collections::HashMap;
use std::hash::Hash;

use ms_core::Cell;
use ms_mouse::HeatMap;

use crate::row::{HeatRow, PathRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Write every path and heat map, then finish the writer.
///
/// Aggregated maps carry no ordering, so mice are sorted by identity first;
/// within a mouse, path rows follow the path and heat rows are row-major.
/// Identities are written as their plain number, matching the population
/// file they were loaded from.
pub fn write_results<W, K>(
    writer: &mut W,
    paths:  &HashMap<K, Vec<Cell>>,
    heat:   &HashMap<K, HeatMap>,
) -> OutputResult<()>
where
    W: OutputWriter,
    K: Copy + Ord + Hash + Into<u32>,
{
    let mut path_ids: Vec<&K> = paths.keys().collect();
    path_ids.sort();
    for id in path_ids {
        let mouse_id: u32 = (*id).into();
        let rows: Vec<PathRow> = paths[id]
            .iter()
            .enumerate()
            .map(|(step, cell)| PathRow {
                mouse_id,
                step:     step as u64,
                x:        cell.x,
                y:        cell.y,
            })
            .collect();
        writer.write_paths(&rows)?;
    }

    let mut heat_ids: Vec<&K> = heat.keys().collect();
    heat_ids.sort();
    for id in heat_ids {
        let mouse_id: u32 = (*id).into();
        let rows: Vec<HeatRow> = heat[id]
            .records()
            .map(|r| HeatRow {
                mouse_id,
                x:        r.cell.x,
                y:        r.cell.y,
                visits:   r.visits,
            })
            .collect();
        if !rows.is_empty() {
            writer.write_heat(&rows)?;
        }
    }

    writer.finish()
}
