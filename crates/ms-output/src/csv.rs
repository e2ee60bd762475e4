//! CSV output backend.
//!
//! One file per row type, each opened with its header already written so an
//! empty run still yields readable files.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use serde::Serialize;

use crate::writer::OutputWriter;
use crate::{HeatRow, OutputResult, PathRow};

pub const PATHS_FILE: &str = "paths.csv";
pub const HEAT_FILE:  &str = "heat.csv";

const PATHS_HEADER: [&str; 4] = ["mouse_id", "step", "x", "y"];
const HEAT_HEADER:  [&str; 4] = ["mouse_id", "x", "y", "visits"];

/// Create `dir/name` and write `header` as its first record.
///
/// Automatic headers are off: `serialize` would only emit them on the first
/// row.
fn open_table(dir: &Path, name: &str, header: &[&str]) -> OutputResult<Writer<File>> {
    let mut table = WriterBuilder::new()
        .has_headers(false)
        .from_path(dir.join(name))?;
    table.write_record(header)?;
    Ok(table)
}

fn append<R: Serialize>(table: &mut Writer<File>, rows: &[R]) -> OutputResult<()> {
    for row in rows {
        table.serialize(row)?;
    }
    Ok(())
}

/// Writes [`PATHS_FILE`] and [`HEAT_FILE`] into one directory.
pub struct CsvWriter {
    paths: Writer<File>,
    heat:  Writer<File>,
    done:  bool,
}

impl CsvWriter {
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            paths: open_table(dir, PATHS_FILE, &PATHS_HEADER)?,
            heat:  open_table(dir, HEAT_FILE, &HEAT_HEADER)?,
            done:  false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        append(&mut self.paths, rows)
    }

    fn write_heat(&mut self, rows: &[HeatRow]) -> OutputResult<()> {
        append(&mut self.heat, rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !std::mem::replace(&mut self.done, true) {
            self.paths.flush()?;
            self.heat.flush()?;
        }
        Ok(())
    }
}
