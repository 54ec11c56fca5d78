//! Errors at the terminal and input boundary. The simulation core is total.

use thiserror::Error;

/// Errors that stop a run
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected user input. Every variant has a documented fallback,
/// so these are logged and replaced rather than propagated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("speed {0:?} is not a whole number of milliseconds")]
    InvalidSpeed(String),
    #[error("unknown pattern choice {0:?}")]
    UnknownDemo(String),
    #[error("unknown run mode {0:?}")]
    UnknownMode(String),
    #[error("unknown rule {0:?}")]
    UnknownRule(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
