//! Event types published after each command.

use cricket_core::{
    BallRecord, Delivery, Innings, InningsTransition, MatchResult, ScoreDelta, TeamId,
};
use serde::{Deserialize, Serialize};

use crate::api::IgnoreReason;

/// Something the front end may need to redraw for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A match was configured and the first ball is about to be bowled.
    MatchStarted { batting: TeamId, total_overs: u32 },

    /// A delivery was accepted and appended to the ball log.
    DeliveryRecorded {
        record: BallRecord,
        transition: InningsTransition,
        delta: ScoreDelta,
    },

    /// A delivery was rejected and left the state untouched.
    DeliveryIgnored {
        delivery: Delivery,
        reason: IgnoreReason,
    },

    /// `innings` closed; `batting` is the side batting next.
    InningsEnded { innings: Innings, batting: TeamId },

    MatchCompleted { result: MatchResult, summary: String },

    /// A snapshot was restored. Front ends must re-render from scratch.
    Undone { history_len: usize },

    /// The match was discarded.
    MatchReset,
}

impl MatchEvent {
    /// True when incremental rendering is no longer valid.
    pub fn requires_full_render(&self) -> bool {
        matches!(
            self,
            Self::MatchStarted { .. } | Self::Undone { .. } | Self::MatchReset
        )
    }
}
