//! Delivery domain: one transition per kind of ball.
//!
//! # Module Structure
//!
//! - `error`: [`DeliveryError`] rejection reasons
//! - `runs`: runs off the bat, including dot balls and boundaries
//! - `wicket`: dismissal of the striker
//! - `wide`: wide ball, one penalty run
//! - `no_ball`: no-ball, penalty run plus runs off the bat, arms a free hit
//!
//! Each delivery implements [`DeliveryTransition`] and is driven through
//! `pre_validate → apply → post_validate` by [`crate::engine::ScoringEngine`].

pub mod error;
pub mod no_ball;
pub mod runs;
pub mod wicket;
pub mod wide;

pub use error::DeliveryError;
pub use no_ball::NoBallDelivery;
pub use runs::RunsDelivery;
pub use wicket::WicketDelivery;
pub use wide::WideDelivery;

use crate::config::MatchConfig;
use crate::engine::InningsTransition;
use crate::state::{BallKind, BallRecord, MatchState};

/// Defines how a delivery mutates match state.
///
/// Implementors override the validation hooks to surface the pre- and
/// post-conditions that must hold around the mutation. Validation hooks are
/// read-only.
pub trait DeliveryTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &MatchState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the delivery by mutating the match state directly.
    /// Implementations may assume that `pre_validate` has passed.
    fn apply(&self, state: &mut MatchState) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &MatchState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// What a delivery produced: the log entry and any innings milestone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delivered {
    pub record: BallRecord,
    pub transition: InningsTransition,
}

/// A ball event emitted by the scorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delivery {
    Runs(RunsDelivery),
    Wicket(WicketDelivery),
    Wide(WideDelivery),
    NoBall(NoBallDelivery),
}

impl Delivery {
    pub fn runs(runs: u8) -> Self {
        Self::Runs(RunsDelivery::new(runs))
    }

    pub fn wicket() -> Self {
        Self::Wicket(WicketDelivery)
    }

    pub fn wide() -> Self {
        Self::Wide(WideDelivery)
    }

    pub fn no_ball(bat_runs: u8) -> Self {
        Self::NoBall(NoBallDelivery::new(bat_runs))
    }

    /// Returns the snake_case name used in logs.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Delivery::Runs(_) => "runs",
            Delivery::Wicket(_) => "wicket",
            Delivery::Wide(_) => "wide",
            Delivery::NoBall(_) => "no_ball",
        }
    }
}

impl From<RunsDelivery> for Delivery {
    fn from(delivery: RunsDelivery) -> Self {
        Self::Runs(delivery)
    }
}

impl From<WicketDelivery> for Delivery {
    fn from(delivery: WicketDelivery) -> Self {
        Self::Wicket(delivery)
    }
}

impl From<WideDelivery> for Delivery {
    fn from(delivery: WideDelivery) -> Self {
        Self::Wide(delivery)
    }
}

impl From<NoBallDelivery> for Delivery {
    fn from(delivery: NoBallDelivery) -> Self {
        Self::NoBall(delivery)
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

pub(crate) fn ensure_live(state: &MatchState) -> Result<(), DeliveryError> {
    if state.is_complete() {
        return Err(DeliveryError::MatchComplete);
    }
    Ok(())
}

/// Invariants every accepted delivery must leave intact.
pub(crate) fn check_invariants(state: &MatchState) -> Result<(), DeliveryError> {
    let crease = state.crease();
    if !crease.is_consistent() {
        return Err(DeliveryError::CreaseCollision {
            slot: crease.striker.slot,
        });
    }

    let limit = state.config().total_overs;
    for team in state.scoreboard().teams.iter() {
        if team.wickets() > MatchConfig::MAX_WICKETS {
            return Err(DeliveryError::WicketsExceeded {
                wickets: team.wickets(),
            });
        }
        if team.overs_completed() > limit {
            return Err(DeliveryError::OversExceeded {
                overs: team.overs_completed(),
                limit,
            });
        }
    }

    Ok(())
}

/// Where a delivery sits in the over.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BallPosition {
    pub over: u32,
    pub ball: u32,
}

impl BallPosition {
    /// Position of a legal delivery, read after the ball counter advanced.
    pub fn legal(legal_balls: u32) -> Self {
        let bowled = legal_balls.saturating_sub(1);
        Self {
            over: bowled / MatchConfig::BALLS_PER_OVER + 1,
            ball: bowled % MatchConfig::BALLS_PER_OVER + 1,
        }
    }

    /// Position of an extra: it is re-bowled as the next legal ball.
    pub fn extra(legal_balls: u32) -> Self {
        Self {
            over: legal_balls / MatchConfig::BALLS_PER_OVER + 1,
            ball: legal_balls % MatchConfig::BALLS_PER_OVER + 1,
        }
    }
}

/// Builds the log entry from the live state, after the tally was updated.
pub(crate) fn record_delivery(
    state: &MatchState,
    position: BallPosition,
    kind: BallKind,
    runs: u32,
    bat_runs: Option<u32>,
    free_hit: bool,
) -> BallRecord {
    let team = state.batting_team();
    BallRecord {
        innings: state.innings().innings,
        over: position.over,
        ball: position.ball,
        batsman: state.crease().striker.name.clone(),
        runs,
        kind,
        bat_runs,
        free_hit,
        total: team.score(),
        wickets: team.wickets(),
    }
}
