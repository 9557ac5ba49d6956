//! Runtime configuration.

use std::env;

use cricket_core::MatchConfig;

/// Settings for a [`crate::MatchController`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Snapshots kept for undo; the oldest is evicted beyond this.
    pub undo_depth: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            undo_depth: MatchConfig::UNDO_DEPTH,
        }
    }
}

impl RuntimeConfig {
    pub const fn new(undo_depth: usize) -> Self {
        Self { undo_depth }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CRICKET_UNDO_DEPTH` - Undo snapshots kept (default: 10, minimum: 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(depth) = read_env::<usize>("CRICKET_UNDO_DEPTH") {
            config.undo_depth = depth.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
