//! Plain data row types written by output backends.
//!
//! Field order is column order: backends serialize rows positionally.

use serde::Serialize;

/// One step of one mouse's path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathRow {
    /// Same number as the `mouse_id` column of the population file.
    pub mouse_id: u32,
    /// 0 is the start cell.
    pub step:     u64,
    pub x:        u32,
    pub y:        u32,
}

/// Visit count for one cell of one mouse's heat map.  Unvisited cells are
/// not written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatRow {
    pub mouse_id: u32,
    pub x:        u32,
    pub y:        u32,
    pub visits:   u32,
}
