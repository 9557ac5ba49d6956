//! Delivery execution pipeline.
//!
//! The [`ScoringEngine`] is the only writer of [`MatchState`]. Every
//! delivery flows through `pre_validate → apply → post_validate`; a
//! rejected delivery leaves the state untouched.

mod errors;
pub(crate) mod innings;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use innings::InningsTransition;

use crate::action::Delivery;
use crate::state::{BallRecord, MatchSnapshot, MatchState, ScoreDelta};

/// Complete outcome of an accepted command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// State as it was before the command; pushing it makes the command undoable.
    pub before: MatchSnapshot,
    /// Log entry appended by a delivery. `None` for a manual innings end.
    pub record: Option<BallRecord>,
    pub transition: InningsTransition,
    /// Which scoreboard fields changed.
    pub delta: ScoreDelta,
}

/// Scoring engine that applies deliveries and innings boundaries.
pub struct ScoringEngine<'a> {
    state: &'a mut MatchState,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    /// Records a delivery.
    ///
    /// If a post-condition fails the state is rolled back to how it was
    /// before the delivery, so every error leaves the match unchanged.
    pub fn execute(&mut self, delivery: &Delivery) -> Result<ExecutionOutcome, ExecuteError> {
        let before = MatchSnapshot::capture(self.state);

        let delivered = match transition::execute_transition(delivery, self.state) {
            Ok(delivered) => delivered,
            Err(error) => {
                if error.phase() != Some(TransitionPhase::PreValidate) {
                    before.restore(self.state);
                }
                return Err(error);
            }
        };

        let delta = ScoreDelta::from_states(&before, self.state);
        Ok(ExecutionOutcome {
            before,
            record: Some(delivered.record),
            transition: delivered.transition,
            delta,
        })
    }

    /// Ends the current innings on the scorer's request.
    pub fn end_innings(&mut self) -> Result<ExecutionOutcome, ExecuteError> {
        if self.state.is_complete() {
            return Err(ExecuteError::MatchComplete);
        }

        let before = MatchSnapshot::capture(self.state);
        let transition = innings::end_innings(self.state);
        let delta = ScoreDelta::from_states(&before, self.state);

        Ok(ExecutionOutcome {
            before,
            record: None,
            transition,
            delta,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::state::fixtures::match_state;
    use crate::state::{Innings, TeamId};
    use proptest::prelude::*;

    fn delivery() -> impl Strategy<Value = Delivery> {
        prop_oneof![
            4 => (0u8..=6).prop_map(Delivery::runs),
            1 => Just(Delivery::wicket()),
            1 => Just(Delivery::wide()),
            1 => prop::sample::select(vec![0u8, 1, 2, 3, 4, 6]).prop_map(Delivery::no_ball),
        ]
    }

    fn play(state: &mut MatchState, deliveries: &[Delivery]) {
        for delivery in deliveries {
            let _ = ScoringEngine::new(state).execute(delivery);
        }
    }

    proptest! {
        /// Property: any sequence of deliveries keeps the scoreboard consistent
        #[test]
        fn prop_invariants_hold(
            overs in 1u32..4,
            deliveries in prop::collection::vec(delivery(), 0..80)
        ) {
            let mut state = match_state(overs);
            play(&mut state, &deliveries);

            for id in TeamId::ALL {
                let team = state.team(id);
                prop_assert!(team.wickets() <= MatchConfig::MAX_WICKETS);
                prop_assert!(team.legal_balls() <= overs * MatchConfig::BALLS_PER_OVER);
                prop_assert_eq!(team.overs_completed(), team.legal_balls() / 6);
            }
            prop_assert!(state.crease().is_consistent());
        }

        /// Property: team totals equal the runs in their half of the log
        #[test]
        fn prop_score_matches_ball_log(
            deliveries in prop::collection::vec(delivery(), 0..80)
        ) {
            let mut state = match_state(2);
            play(&mut state, &deliveries);

            let first: u32 = state.ball_log().innings(Innings::First).map(|r| r.runs).sum();
            let second: u32 = state.ball_log().innings(Innings::Second).map(|r| r.runs).sum();
            prop_assert_eq!(state.team(TeamId::A).score(), first);
            prop_assert_eq!(state.team(TeamId::B).score(), second);
        }

        /// Property: restoring the pre-delivery snapshot is an exact inverse
        #[test]
        fn prop_restore_inverts_delivery(
            prefix in prop::collection::vec(delivery(), 0..40),
            next in delivery()
        ) {
            let mut state = match_state(3);
            play(&mut state, &prefix);
            let expected = state.clone();

            if let Ok(outcome) = ScoringEngine::new(&mut state).execute(&next) {
                outcome.before.restore(&mut state);
            }
            prop_assert_eq!(state, expected);
        }

        /// Property: a finished match rejects every further delivery
        #[test]
        fn prop_complete_match_is_frozen(next in delivery()) {
            let mut state = match_state(1);
            let mut engine = ScoringEngine::new(&mut state);
            engine.end_innings().unwrap();
            engine.end_innings().unwrap();
            drop(engine);
            let frozen = state.clone();

            prop_assert!(ScoringEngine::new(&mut state).execute(&next).is_err());
            prop_assert_eq!(state, frozen);
        }
    }
}
