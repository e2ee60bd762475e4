//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `MsError` as one variant
//! where grid failures can surface.

use thiserror::Error;

use crate::Cell;

/// The top-level error type for `ms-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MsError {
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Cell),

    #[error("cell {0} is a wall")]
    Blocked(Cell),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `ms-*` crates.
pub type MsResult<T> = Result<T, MsError>;
