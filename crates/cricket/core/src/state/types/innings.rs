use super::{Innings, TeamId};
use crate::config::MatchConfig;

/// Which innings is live and who is batting and bowling in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InningsContext {
    pub innings: Innings,
    pub batting: TeamId,
    pub bowling: TeamId,
}

impl InningsContext {
    /// First-innings context derived from the toss.
    pub fn from_config(config: &MatchConfig) -> Self {
        let batting = config.batting_first();
        Self {
            innings: Innings::First,
            batting,
            bowling: batting.other(),
        }
    }

    /// Context for the innings break: sides swap, innings advances.
    pub fn second_innings(self) -> Self {
        Self {
            innings: Innings::Second,
            batting: self.bowling,
            bowling: self.batting,
        }
    }
}
