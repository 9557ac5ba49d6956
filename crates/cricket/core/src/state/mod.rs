//! Authoritative match state representation.
//!
//! [`MatchState`] splits into a small [`Scoreboard`] (teams, innings, crease,
//! flags) and the append-only [`BallLog`]. Runtime layers read it freely but
//! mutate it exclusively through [`crate::engine::ScoringEngine`].
pub mod ball;
pub mod delta;
pub mod snapshot;
pub mod types;

pub use ball::{BallKind, BallLog, BallRecord};
pub use delta::{ScoreDelta, ScoreFields};
pub use snapshot::MatchSnapshot;
pub use types::{Batsman, Crease, Innings, InningsContext, Lineup, Team, TeamId};

use crate::config::MatchConfig;
use crate::error::{ErrorSeverity, ScoringError};
use crate::result::MatchResult;

/// Errors raised while assembling a match from setup input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    #[error("lineup has {count} players; at least {min} are needed to open")]
    LineupTooSmall { count: usize, min: usize },

    #[error("lineup exceeds {max} players")]
    LineupTooLarge { max: usize },

    #[error("a match needs at least one over per innings")]
    NoOvers,
}

impl ScoringError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LineupTooSmall { .. } => "SETUP_LINEUP_TOO_SMALL",
            Self::LineupTooLarge { .. } => "SETUP_LINEUP_TOO_LARGE",
            Self::NoOvers => "SETUP_NO_OVERS",
        }
    }
}

/// Everything about the match except the ball log.
///
/// Cheap to clone; this is what undo snapshots copy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    pub(crate) config: MatchConfig,
    /// Indexed by [`TeamId`].
    pub(crate) teams: [Team; 2],
    pub(crate) innings: InningsContext,
    pub(crate) crease: Crease,
    /// The next delivery is a free hit.
    pub(crate) free_hit: bool,
    pub(crate) complete: bool,
    pub(crate) result: Option<MatchResult>,
}

/// Canonical state of a match in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub(crate) board: Scoreboard,
    pub(crate) log: BallLog,
}

impl MatchState {
    /// Starts a match after the toss.
    ///
    /// The side batting first is seated with its openers; nothing has been
    /// bowled yet.
    pub fn new(team_a: Team, team_b: Team, config: MatchConfig) -> Result<Self, SetupError> {
        if config.total_overs == 0 {
            return Err(SetupError::NoOvers);
        }

        let innings = InningsContext::from_config(&config);
        let teams = [team_a, team_b];
        let crease = Crease::openers(teams[innings.batting.index()].lineup());

        Ok(Self {
            board: Scoreboard {
                config,
                teams,
                innings,
                crease,
                free_hit: false,
                complete: false,
                result: None,
            },
            log: BallLog::new(),
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.board.config
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.board
    }

    pub fn team(&self, id: TeamId) -> &Team {
        &self.board.teams[id.index()]
    }

    pub(crate) fn team_mut(&mut self, id: TeamId) -> &mut Team {
        &mut self.board.teams[id.index()]
    }

    pub fn innings(&self) -> InningsContext {
        self.board.innings
    }

    pub fn batting_team(&self) -> &Team {
        self.team(self.board.innings.batting)
    }

    pub(crate) fn batting_team_mut(&mut self) -> &mut Team {
        self.team_mut(self.board.innings.batting)
    }

    pub fn bowling_team(&self) -> &Team {
        self.team(self.board.innings.bowling)
    }

    pub fn crease(&self) -> &Crease {
        &self.board.crease
    }

    pub fn is_free_hit(&self) -> bool {
        self.board.free_hit
    }

    pub fn is_complete(&self) -> bool {
        self.board.complete
    }

    /// Final result, available once the match is complete.
    pub fn result(&self) -> Option<&MatchResult> {
        self.board.result.as_ref()
    }

    pub fn ball_log(&self) -> &BallLog {
        &self.log
    }

    /// Runs the chasing side needs to win, during the second innings.
    pub fn target(&self) -> Option<u32> {
        self.board
            .innings
            .innings
            .is_second()
            .then(|| self.bowling_team().score() + 1)
    }

    /// True once the chasing side has passed the first-innings total.
    pub fn target_reached(&self) -> bool {
        self.target()
            .is_some_and(|target| self.batting_team().score() >= target)
    }
}
