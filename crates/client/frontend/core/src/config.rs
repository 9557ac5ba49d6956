//! Frontend configuration structures and loaders.
//!
//! UI-side settings shared by any presentation layer.

use std::env;

use cricket_core::MatchConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    pub history: HistoryConfig,
    pub setup: SetupConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            setup: SetupConfig::default(),
        }
    }
}

impl FrontendConfig {
    pub const fn new(history: HistoryConfig, setup: SetupConfig) -> Self {
        Self { history, setup }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CRICKET_HISTORY_WINDOW` - Ball history lines kept on screen (default: 20)
    /// - `CRICKET_DEFAULT_OVERS` - Overs used when the setup field is unusable (default: 6)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(window) = read_env::<usize>("CRICKET_HISTORY_WINDOW") {
            config.history.window = window.max(1);
        }
        if let Some(overs) = read_env::<u32>("CRICKET_DEFAULT_OVERS") {
            config.setup.default_overs = overs.max(1);
        }

        config
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryConfig {
    pub window: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { window: 20 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupConfig {
    pub default_overs: u32,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            default_overs: MatchConfig::DEFAULT_TOTAL_OVERS,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
