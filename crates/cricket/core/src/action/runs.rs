use crate::action::{
    BallPosition, Delivered, DeliveryError, DeliveryTransition, check_invariants, ensure_live,
    record_delivery,
};
use crate::engine::innings;
use crate::state::{BallKind, MatchState};

/// Runs off the bat from a legal delivery (0 is a dot ball).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunsDelivery {
    pub runs: u8,
}

impl RunsDelivery {
    pub const MAX_RUNS: u8 = 6;

    pub fn new(runs: u8) -> Self {
        Self { runs }
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self.runs, 4 | 6)
    }
}

impl DeliveryTransition for RunsDelivery {
    type Error = DeliveryError;
    type Result = Delivered;

    fn pre_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        ensure_live(state)?;
        if self.runs > Self::MAX_RUNS {
            return Err(DeliveryError::InvalidRuns { runs: self.runs });
        }
        Ok(())
    }

    fn apply(&self, state: &mut MatchState) -> Result<Self::Result, Self::Error> {
        let runs = u32::from(self.runs);
        let free_hit = state.is_free_hit();

        let team = state.batting_team_mut();
        team.score += runs;
        team.legal_balls += 1;
        let position = BallPosition::legal(team.legal_balls);

        let striker = &mut state.board.crease.striker;
        striker.runs += runs;
        striker.balls += 1;

        let kind = if self.is_boundary() {
            BallKind::Boundary
        } else {
            BallKind::Normal
        };
        let record = record_delivery(state, position, kind, runs, None, free_hit);
        state.log.push(record.clone());

        state.board.free_hit = false;
        if runs % 2 == 1 {
            state.board.crease.rotate_strike();
        }

        let transition = innings::complete_legal_delivery(state);
        Ok(Delivered { record, transition })
    }

    fn post_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::InningsTransition;
    use crate::state::fixtures::match_state;

    #[test]
    fn single_rotates_strike_and_counts_ball() {
        let mut state = match_state(6);
        let delivered = RunsDelivery::new(1).apply(&mut state).unwrap();

        assert_eq!(state.batting_team().score(), 1);
        assert_eq!(state.batting_team().legal_balls(), 1);
        assert_eq!(state.crease().striker.name, "A 2");
        assert_eq!(state.crease().non_striker.runs, 1);
        assert_eq!(state.crease().non_striker.balls, 1);
        assert_eq!(delivered.record.batsman, "A 1");
        assert_eq!(delivered.record.kind, BallKind::Normal);
        assert_eq!((delivered.record.over, delivered.record.ball), (1, 1));
        assert_eq!(delivered.transition, InningsTransition::Continue);
    }

    #[test]
    fn four_and_six_are_boundaries() {
        let mut state = match_state(6);
        let four = RunsDelivery::new(4).apply(&mut state).unwrap();
        let six = RunsDelivery::new(6).apply(&mut state).unwrap();
        assert_eq!(four.record.kind, BallKind::Boundary);
        assert_eq!(six.record.kind, BallKind::Boundary);
        assert_eq!(six.record.total, 10);
        assert_eq!(state.crease().striker.name, "A 1");
    }

    #[test]
    fn records_and_clears_free_hit() {
        let mut state = match_state(6);
        state.board.free_hit = true;
        let delivered = RunsDelivery::new(2).apply(&mut state).unwrap();
        assert!(delivered.record.free_hit);
        assert!(!state.is_free_hit());
    }

    #[test]
    fn over_end_rotates_strike_even_after_single() {
        let mut state = match_state(6);
        for _ in 0..5 {
            RunsDelivery::new(0).apply(&mut state).unwrap();
        }
        // Single on the last ball: rotation for the run, then for the over.
        let delivered = RunsDelivery::new(1).apply(&mut state).unwrap();
        assert_eq!(delivered.transition, InningsTransition::OverCompleted);
        assert_eq!((delivered.record.over, delivered.record.ball), (1, 6));
        assert_eq!(state.crease().striker.name, "A 1");
        assert_eq!(state.batting_team().overs_completed(), 1);
    }

    #[test]
    fn seven_runs_rejected_before_mutation() {
        let state = match_state(6);
        assert_eq!(
            RunsDelivery::new(7).pre_validate(&state),
            Err(DeliveryError::InvalidRuns { runs: 7 })
        );
    }

    #[test]
    fn no_scoring_after_completion() {
        let mut state = match_state(6);
        state.board.complete = true;
        assert_eq!(
            RunsDelivery::new(4).pre_validate(&state),
            Err(DeliveryError::MatchComplete)
        );
    }
}
