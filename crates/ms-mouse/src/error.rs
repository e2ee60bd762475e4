use ms_core::{Cell, MsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MouseError {
    #[error("grid error: {0}")]
    Grid(#[from] MsError),

    #[error("mouse at {0} has no open neighbour to move to")]
    Trapped(Cell),

    #[error("mouse already reached a terminal state")]
    AlreadyDone,

    #[error("population parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MouseResult<T> = Result<T, MouseError>;
