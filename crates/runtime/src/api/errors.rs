//! Unified error types surfaced by the runtime API.
//!
//! Rejected scoring commands are not errors here: they come back as
//! [`crate::CommandOutcome::Ignored`]. These types cover setup and export.
use thiserror::Error;

use cricket_core::SetupError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to set up match")]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Failures while writing the ball-by-ball export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no match to export")]
    NoMatch,

    #[error("failed to write export")]
    Io(#[from] std::io::Error),

    #[error("failed to encode export row")]
    Csv(#[from] csv::Error),
}
