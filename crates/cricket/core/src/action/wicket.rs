use crate::action::{
    BallPosition, Delivered, DeliveryError, DeliveryTransition, check_invariants, ensure_live,
    record_delivery,
};
use crate::engine::innings;
use crate::state::{BallKind, MatchState};

/// The striker is dismissed off a legal delivery.
///
/// Rejected on a free hit: the batsman is reprieved and nothing is counted,
/// not even the ball.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WicketDelivery;

impl DeliveryTransition for WicketDelivery {
    type Error = DeliveryError;
    type Result = Delivered;

    fn pre_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        ensure_live(state)?;
        if state.is_free_hit() {
            return Err(DeliveryError::FreeHitReprieve);
        }
        Ok(())
    }

    fn apply(&self, state: &mut MatchState) -> Result<Self::Result, Self::Error> {
        let team = state.batting_team_mut();
        team.wickets += 1;
        team.legal_balls += 1;
        let position = BallPosition::legal(team.legal_balls);
        let wickets = team.wickets;

        state.board.crease.striker.balls += 1;

        let record = record_delivery(state, position, BallKind::Wicket, 0, None, false);
        state.log.push(record.clone());
        state.board.free_hit = false;

        if state.batting_team().is_all_out() {
            let transition = innings::end_innings(state);
            return Ok(Delivered { record, transition });
        }

        // Batting order is fixed: the n-th wicket brings in slot n + 1.
        let board = &mut state.board;
        let lineup = board.teams[board.innings.batting.index()].lineup();
        board.crease.replace_striker(lineup, usize::from(wickets) + 1);

        let transition = innings::complete_legal_delivery(state);
        Ok(Delivered { record, transition })
    }

    fn post_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}
