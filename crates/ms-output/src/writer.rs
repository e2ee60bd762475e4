//! The `OutputWriter` trait implemented by all backend writers.

use crate::{HeatRow, OutputResult, PathRow};

/// Sink for flattened simulation results.
pub trait OutputWriter {
    /// Write a batch of path rows.
    fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()>;

    /// Write a batch of heat rows.
    fn write_heat(&mut self, rows: &[HeatRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
