//! Final result of a completed match.

use crate::state::{MatchState, Team, TeamId};

/// How the match was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchResult {
    Tie,
    /// Team A finished ahead; margin is the run difference.
    WonByRuns { winner: TeamId, margin: u32 },
    /// Team B finished ahead; margin is B's wickets in hand.
    WonByWickets { winner: TeamId, wickets_in_hand: u8 },
}

impl MatchResult {
    /// Decides the match by comparing team A's total with team B's.
    ///
    /// Team A winning is counted in runs, team B winning in B's wickets in
    /// hand (out of ten), whichever side batted first.
    pub fn decide(team_a: &Team, team_b: &Team) -> Self {
        match team_a.score().cmp(&team_b.score()) {
            core::cmp::Ordering::Equal => Self::Tie,
            core::cmp::Ordering::Greater => Self::WonByRuns {
                winner: TeamId::A,
                margin: team_a.score() - team_b.score(),
            },
            core::cmp::Ordering::Less => Self::WonByWickets {
                winner: TeamId::B,
                wickets_in_hand: team_b.wickets_in_hand(),
            },
        }
    }

    pub fn from_state(state: &MatchState) -> Self {
        Self::decide(state.team(TeamId::A), state.team(TeamId::B))
    }

    pub fn winner(&self) -> Option<TeamId> {
        match *self {
            Self::Tie => None,
            Self::WonByRuns { winner, .. } | Self::WonByWickets { winner, .. } => Some(winner),
        }
    }

    /// Human-readable result line using the teams' names.
    pub fn describe(&self, state: &MatchState) -> String {
        match *self {
            Self::Tie => "Match Tied".to_string(),
            Self::WonByRuns { winner, margin } => {
                format!("{} won by {margin} runs", state.team(winner).name())
            }
            Self::WonByWickets {
                winner,
                wickets_in_hand,
            } => format!(
                "{} won by {wickets_in_hand} wickets",
                state.team(winner).name()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::lineup;

    fn team(name: &str, score: u32, wickets: u8) -> Team {
        let mut team = Team::new(name, lineup(name, 10));
        team.score = score;
        team.wickets = wickets;
        team
    }

    #[test]
    fn equal_scores_tie() {
        let result = MatchResult::decide(&team("A", 80, 3), &team("B", 80, 9));
        assert_eq!(result, MatchResult::Tie);
        assert_eq!(result.winner(), None);
    }

    #[test]
    fn team_a_ahead_wins_by_runs() {
        let result = MatchResult::decide(&team("A", 120, 7), &team("B", 101, 9));
        assert_eq!(
            result,
            MatchResult::WonByRuns {
                winner: TeamId::A,
                margin: 19
            }
        );
    }

    #[test]
    fn team_b_ahead_wins_by_wickets_in_hand() {
        let result = MatchResult::decide(&team("A", 100, 4), &team("B", 102, 3));
        assert_eq!(
            result,
            MatchResult::WonByWickets {
                winner: TeamId::B,
                wickets_in_hand: 7
            }
        );
    }

    #[test]
    fn margin_follows_team_label_not_batting_order() {
        // B batted first and finished ahead: still a wickets margin.
        let result = MatchResult::decide(&team("A", 2, 0), &team("B", 6, 0));
        assert_eq!(
            result,
            MatchResult::WonByWickets {
                winner: TeamId::B,
                wickets_in_hand: 10
            }
        );
    }
}
