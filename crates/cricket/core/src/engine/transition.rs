//! Delivery dispatch and execution logic.

use crate::action::{Delivered, Delivery, DeliveryTransition};
use crate::state::MatchState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the match state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut MatchState,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: DeliveryTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each delivery kind to its transition.
pub(super) fn execute_transition(
    delivery: &Delivery,
    state: &mut MatchState,
) -> Result<Delivered, ExecuteError> {
    match delivery {
        Delivery::Runs(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::Runs)
        }
        Delivery::Wicket(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::Wicket)
        }
        Delivery::Wide(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::Wide)
        }
        Delivery::NoBall(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::NoBall)
        }
    }
}
