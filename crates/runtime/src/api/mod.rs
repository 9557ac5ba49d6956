//! Public API surface for runtime consumers.
//!
//! Exposes the command vocabulary accepted by [`crate::MatchController`] and
//! the error types it reports.
mod command;
mod errors;

pub use command::{Command, CommandOutcome, IgnoreReason};
pub use errors::{ExportError, Result, RuntimeError};
