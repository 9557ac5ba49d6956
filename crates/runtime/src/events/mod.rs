//! Events emitted by the controller for front ends to consume.
mod queue;
mod types;

pub use queue::EventQueue;
pub use types::MatchEvent;
