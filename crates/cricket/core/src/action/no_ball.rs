use crate::action::{
    BallPosition, Delivered, DeliveryError, DeliveryTransition, check_invariants, ensure_live,
    record_delivery,
};
use crate::engine::innings;
use crate::state::{BallKind, MatchState};

/// A no-ball: one penalty run plus whatever the batsman scored off it.
///
/// Not a legal delivery, so the over does not advance. The next delivery
/// becomes a free hit. Only when bat runs were scored does the striker's
/// tally (runs and balls faced) move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoBallDelivery {
    pub bat_runs: u8,
}

impl NoBallDelivery {
    pub const PENALTY: u32 = 1;
    /// Outcomes the scorer can record off the bat.
    pub const BAT_RUNS: [u8; 6] = [0, 1, 2, 3, 4, 6];

    pub fn new(bat_runs: u8) -> Self {
        Self { bat_runs }
    }

    pub fn total(&self) -> u32 {
        Self::PENALTY + u32::from(self.bat_runs)
    }
}

impl DeliveryTransition for NoBallDelivery {
    type Error = DeliveryError;
    type Result = Delivered;

    fn pre_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        ensure_live(state)?;
        if !Self::BAT_RUNS.contains(&self.bat_runs) {
            return Err(DeliveryError::InvalidBatRuns {
                runs: self.bat_runs,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut MatchState) -> Result<Self::Result, Self::Error> {
        let bat_runs = u32::from(self.bat_runs);
        let total = self.total();

        let team = state.batting_team_mut();
        team.score += total;
        let position = BallPosition::extra(team.legal_balls);

        if bat_runs > 0 {
            let striker = &mut state.board.crease.striker;
            striker.runs += bat_runs;
            striker.balls += 1;
        }

        let record = record_delivery(
            state,
            position,
            BallKind::NoBall,
            total,
            Some(bat_runs),
            false,
        );
        state.log.push(record.clone());

        state.board.free_hit = true;
        if bat_runs % 2 == 1 {
            state.board.crease.rotate_strike();
        }

        let transition = innings::check_target(state);
        Ok(Delivered { record, transition })
    }

    fn post_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}
