//! Over, innings and match boundaries.
//!
//! Called from inside delivery transitions once the tally is updated, and
//! by the engine for a manual innings end.

use crate::result::MatchResult;
use crate::state::{Crease, Innings, MatchState};

/// Milestone reached by a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InningsTransition {
    #[default]
    Continue,
    OverCompleted,
    InningsEnded,
    MatchEnded,
}

impl InningsTransition {
    /// True when the batting side changed or play stopped.
    pub fn ends_innings(&self) -> bool {
        matches!(self, Self::InningsEnded | Self::MatchEnded)
    }
}

/// Handles the end of a legal delivery.
///
/// At an over boundary strike rotates; then the innings ends if its overs
/// are exhausted. Otherwise a chase that has passed its target ends the
/// match.
pub(crate) fn complete_legal_delivery(state: &mut MatchState) -> InningsTransition {
    if state.batting_team().at_over_boundary() {
        state.board.crease.rotate_strike();
        if state.batting_team().overs_completed() >= state.config().total_overs {
            return end_innings(state);
        }
        if state.target_reached() {
            end_match(state);
            return InningsTransition::MatchEnded;
        }
        return InningsTransition::OverCompleted;
    }

    check_target(state)
}

/// Ends the match as soon as the chasing side passes the target.
pub(crate) fn check_target(state: &mut MatchState) -> InningsTransition {
    if state.target_reached() {
        end_match(state);
        InningsTransition::MatchEnded
    } else {
        InningsTransition::Continue
    }
}

/// Closes the current innings.
///
/// After the first, sides swap and the new batting side's openers come
/// in. After the second, the match is over. No-op on a finished match.
pub(crate) fn end_innings(state: &mut MatchState) -> InningsTransition {
    if state.is_complete() {
        return InningsTransition::Continue;
    }

    match state.innings().innings {
        Innings::First => {
            let board = &mut state.board;
            board.innings = board.innings.second_innings();
            board.crease = Crease::openers(board.teams[board.innings.batting.index()].lineup());
            board.free_hit = false;
            InningsTransition::InningsEnded
        }
        Innings::Second => {
            end_match(state);
            InningsTransition::MatchEnded
        }
    }
}

/// Marks the match complete and fixes its result.
pub(crate) fn end_match(state: &mut MatchState) -> MatchResult {
    if let Some(result) = state.board.result {
        return result;
    }
    let result = MatchResult::from_state(state);
    state.board.complete = true;
    state.board.result = Some(result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TeamId;
    use crate::state::fixtures::match_state;

    #[test]
    fn first_innings_end_swaps_sides() {
        let mut state = match_state(6);
        state.board.free_hit = true;
        state.board.crease.rotate_strike();

        assert_eq!(end_innings(&mut state), InningsTransition::InningsEnded);
        assert_eq!(state.innings().innings, Innings::Second);
        assert_eq!(state.innings().batting, TeamId::B);
        assert_eq!(state.innings().bowling, TeamId::A);
        assert_eq!(state.crease().striker.name, "B 1");
        assert_eq!(state.crease().non_striker.name, "B 2");
        assert!(!state.is_free_hit());
        assert!(!state.is_complete());
    }

    #[test]
    fn second_innings_end_completes_match() {
        let mut state = match_state(6);
        state.team_mut(TeamId::A).score = 40;
        end_innings(&mut state);
        state.team_mut(TeamId::B).score = 30;

        assert_eq!(end_innings(&mut state), InningsTransition::MatchEnded);
        assert!(state.is_complete());
        assert_eq!(
            state.result(),
            Some(&MatchResult::WonByRuns {
                winner: TeamId::A,
                margin: 10
            })
        );
        assert_eq!(end_innings(&mut state), InningsTransition::Continue);
    }

    #[test]
    fn target_only_applies_in_second_innings() {
        let mut state = match_state(6);
        state.team_mut(TeamId::A).score = 50;
        assert_eq!(check_target(&mut state), InningsTransition::Continue);

        end_innings(&mut state);
        state.team_mut(TeamId::B).score = 50;
        assert_eq!(check_target(&mut state), InningsTransition::Continue);
        state.team_mut(TeamId::B).score = 51;
        assert_eq!(check_target(&mut state), InningsTransition::MatchEnded);
        assert!(state.is_complete());
    }
}
