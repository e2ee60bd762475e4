//! JSON run file.
//!
//! ```json
//! {
//!   "sim":  { "seed": 42, "progress_interval_ticks": 100000 },
//!   "grid": "data/maze.txt",
//!   "mice": "data/mice.csv"
//! }
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use ms_core::SimConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RunFile {
    pub sim:  SimConfig,
    pub grid: Option<PathBuf>,
    pub mice: Option<PathBuf>,
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading run file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing run file {}", path.display()))
    }
}
