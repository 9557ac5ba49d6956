use bitflags::bitflags;

use super::{MatchSnapshot, MatchState};

bitflags! {
    /// Tracks which scoreboard fields changed during a transition.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ScoreFields: u16 {
        const SCORE       = 1 << 0;
        const WICKETS     = 1 << 1;
        const LEGAL_BALLS = 1 << 2;
        /// Striker or non-striker is a different player.
        const STRIKE      = 1 << 3;
        /// Runs or balls of a batsman at the crease.
        const BATSMEN     = 1 << 4;
        const FREE_HIT    = 1 << 5;
        const INNINGS     = 1 << 6;
        const COMPLETE    = 1 << 7;
    }
}

/// Minimal description of a transition's impact on the match state.
///
/// Records only which fields changed and how many log entries were
/// appended; values are read from the state itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreDelta {
    pub fields: ScoreFields,
    /// Ball records appended by the transition.
    pub appended: usize,
}

impl ScoreDelta {
    /// Compares the pre-transition snapshot with the live state.
    pub fn from_states(before: &MatchSnapshot, after: &MatchState) -> Self {
        let old = before.scoreboard();
        let new = after.scoreboard();
        let mut fields = ScoreFields::empty();

        for (previous, current) in old.teams.iter().zip(new.teams.iter()) {
            if previous.score != current.score {
                fields |= ScoreFields::SCORE;
            }
            if previous.wickets != current.wickets {
                fields |= ScoreFields::WICKETS;
            }
            if previous.legal_balls != current.legal_balls {
                fields |= ScoreFields::LEGAL_BALLS;
            }
        }

        let (old_crease, new_crease) = (&old.crease, &new.crease);
        if old_crease.striker.slot != new_crease.striker.slot
            || old_crease.non_striker.slot != new_crease.non_striker.slot
        {
            fields |= ScoreFields::STRIKE;
        }
        if old_crease != new_crease {
            fields |= ScoreFields::BATSMEN;
        }
        if old.free_hit != new.free_hit {
            fields |= ScoreFields::FREE_HIT;
        }
        if old.innings != new.innings {
            fields |= ScoreFields::INNINGS;
        }
        if old.complete != new.complete {
            fields |= ScoreFields::COMPLETE;
        }

        Self {
            fields,
            appended: after.ball_log().len().saturating_sub(before.log_len()),
        }
    }

    /// Returns true if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.appended == 0
    }
}
