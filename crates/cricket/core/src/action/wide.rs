use crate::action::{
    BallPosition, Delivered, DeliveryError, DeliveryTransition, check_invariants, ensure_live,
    record_delivery,
};
use crate::engine::innings;
use crate::state::{BallKind, MatchState};

/// One penalty run; the ball is re-bowled.
///
/// Not a legal delivery: no ball is counted against the over or the
/// striker, strike does not change and a pending free hit carries over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WideDelivery;

impl WideDelivery {
    pub const PENALTY: u32 = 1;
}

impl DeliveryTransition for WideDelivery {
    type Error = DeliveryError;
    type Result = Delivered;

    fn pre_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        ensure_live(state)
    }

    fn apply(&self, state: &mut MatchState) -> Result<Self::Result, Self::Error> {
        let free_hit = state.is_free_hit();
        let team = state.batting_team_mut();
        team.score += Self::PENALTY;
        let position = BallPosition::extra(team.legal_balls);

        let record = record_delivery(
            state,
            position,
            BallKind::Wide,
            Self::PENALTY,
            None,
            free_hit,
        );
        state.log.push(record.clone());

        let transition = innings::check_target(state);
        Ok(Delivered { record, transition })
    }

    fn post_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::RunsDelivery;
    use crate::engine::InningsTransition;
    use crate::state::fixtures::match_state;

    #[test]
    fn adds_one_run_without_a_ball() {
        let mut state = match_state(6);
        RunsDelivery::new(0).apply(&mut state).unwrap();
        let delivered = WideDelivery.apply(&mut state).unwrap();

        assert_eq!(state.batting_team().score(), 1);
        assert_eq!(state.batting_team().legal_balls(), 1);
        assert_eq!(state.crease().striker.balls, 1);
        assert_eq!(state.crease().striker.name, "A 1");
        assert_eq!((delivered.record.over, delivered.record.ball), (1, 2));
        assert_eq!(delivered.record.runs, 1);
        assert_eq!(delivered.transition, InningsTransition::Continue);
    }

    #[test]
    fn free_hit_survives_a_wide() {
        let mut state = match_state(6);
        state.board.free_hit = true;
        let delivered = WideDelivery.apply(&mut state).unwrap();
        assert!(delivered.record.free_hit);
        assert!(state.is_free_hit());
    }
}
