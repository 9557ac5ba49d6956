//! View-model snapshots derived from [`cricket_core::MatchState`].
use bitflags::bitflags;
use cricket_core::{Batsman, MatchConfig, MatchState, Team, TeamId};

use crate::format;
use crate::history::{HistoryEntry, HistoryFeed};

bitflags! {
    /// Scorer controls currently usable.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Controls: u8 {
        /// Runs, wides and no-balls.
        const SCORE       = 1 << 0;
        const WICKET      = 1 << 1;
        const UNDO        = 1 << 2;
        const END_INNINGS = 1 << 3;
    }
}

impl Controls {
    pub fn from_state(state: &MatchState, can_undo: bool) -> Self {
        let mut controls = Self::empty();
        if state.is_complete() {
            return controls;
        }

        controls |= Self::SCORE | Self::END_INNINGS;
        if !state.is_free_hit() {
            controls |= Self::WICKET;
        }
        if can_undo {
            controls |= Self::UNDO;
        }
        controls
    }
}

/// High-level snapshot of the scoreboard used by presentation layers.
#[derive(Clone, Debug, PartialEq)]
pub struct UiFrame {
    pub header: HeaderView,
    pub score: ScoreView,
    pub striker: BatsmanView,
    pub non_striker: BatsmanView,
    /// Present during the second innings.
    pub chase: Option<ChaseView>,
    pub free_hit: bool,
    pub controls: Controls,
    pub history: Vec<HistoryEntry>,
}

impl UiFrame {
    pub fn from_state(state: &MatchState, can_undo: bool, history: &HistoryFeed) -> Self {
        let crease = state.crease();
        Self {
            header: HeaderView::from_state(state),
            score: ScoreView::from_team(state.batting_team()),
            striker: BatsmanView::from_batsman(&crease.striker),
            non_striker: BatsmanView::from_batsman(&crease.non_striker),
            chase: ChaseView::from_state(state),
            free_hit: state.is_free_hit(),
            controls: Controls::from_state(state, can_undo),
            history: history.iter().cloned().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderView {
    /// "Team A Batting"
    pub batting: String,
    /// "1st Innings"
    pub innings: String,
    /// "6 Overs Match"
    pub format: String,
}

impl HeaderView {
    fn from_state(state: &MatchState) -> Self {
        Self {
            batting: format!("{} Batting", state.batting_team().name()),
            innings: state.innings().innings.to_string(),
            format: format!("{} Overs Match", state.config().total_overs),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreView {
    pub total: u32,
    pub wickets: u8,
    pub overs: String,
    pub run_rate: String,
}

impl ScoreView {
    fn from_team(team: &Team) -> Self {
        Self {
            total: team.score(),
            wickets: team.wickets(),
            overs: format::overs(team.legal_balls()),
            run_rate: format::rate(format::run_rate(team.score(), team.legal_balls())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatsmanView {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub strike_rate: String,
}

impl BatsmanView {
    fn from_batsman(batsman: &Batsman) -> Self {
        Self {
            name: batsman.name.clone(),
            runs: batsman.runs,
            balls: batsman.balls,
            strike_rate: format::rate(format::strike_rate(batsman.runs, batsman.balls)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChaseView {
    pub target: u32,
    pub runs_to_win: u32,
    pub balls_left: u32,
    pub required_rate: String,
}

impl ChaseView {
    fn from_state(state: &MatchState) -> Option<Self> {
        let target = state.target()?;
        let team = state.batting_team();
        let runs_to_win = target.saturating_sub(team.score());
        let balls_left = (state.config().total_overs * MatchConfig::BALLS_PER_OVER)
            .saturating_sub(team.legal_balls());

        Some(Self {
            target,
            runs_to_win,
            balls_left,
            required_rate: format::rate(format::required_rate(runs_to_win, balls_left)),
        })
    }
}

/// End-of-match screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryView {
    /// Indexed like [`TeamId::ALL`].
    pub teams: [TeamSummary; 2],
    pub result: String,
}

impl SummaryView {
    /// `None` until the match is complete.
    pub fn from_state(state: &MatchState) -> Option<Self> {
        let result = state.result()?;
        Some(Self {
            teams: TeamId::ALL.map(|id| TeamSummary::from_team(state.team(id))),
            result: result.describe(state),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamSummary {
    pub name: String,
    /// "score/wickets (overs.balls overs)"
    pub line: String,
}

impl TeamSummary {
    fn from_team(team: &Team) -> Self {
        Self {
            name: team.name().to_string(),
            line: format!(
                "{}/{} ({} overs)",
                team.score(),
                team.wickets(),
                format::overs(team.legal_balls())
            ),
        }
    }
}
