//! `ms-output` — result writers for the mouse_sim framework.
//!
//! Takes the aggregated maps returned by `Sim::all_paths` and
//! `Sim::all_heat_data` and hands them to a presentation layer as files.
//!
//! | Backend | Files created              |
//! |---------|----------------------------|
//! | CSV     | `paths.csv`, `heat.csv`    |
//!
//! Backends implement [`OutputWriter`]; [`write_results`] flattens the maps
//! into rows sorted by mouse identity so repeated runs produce identical
//! files.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ms_output::{CsvWriter, write_results};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_results(&mut writer, &sim.all_paths(), &sim.all_heat_data())?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::write_results;
pub use row::{HeatRow, PathRow};
pub use writer::OutputWriter;
