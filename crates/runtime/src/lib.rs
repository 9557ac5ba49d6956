//! Runtime orchestration for a cricket match.
//!
//! This crate wraps the deterministic rules in `cricket-core` with the
//! pieces an application needs around them: a command dispatcher, undo
//! history, an event queue for front ends and the CSV export.
//!
//! Modules are organized by responsibility:
//! - [`controller`] hosts [`MatchController`], the single mutation entry point
//! - [`api`] exposes the command and error types downstream clients use
//! - [`events`] queues [`MatchEvent`]s for front ends
//! - [`history`] keeps the bounded undo stack
//! - [`export`] writes the ball-by-ball CSV
pub mod api;
pub mod config;
pub mod controller;
pub mod events;
pub mod export;
pub mod history;

pub use api::{Command, CommandOutcome, ExportError, IgnoreReason, Result, RuntimeError};
pub use config::RuntimeConfig;
pub use controller::MatchController;
pub use events::{EventQueue, MatchEvent};
pub use history::UndoHistory;
