//! Error types for the delivery execution pipeline.

use crate::action::{
    DeliveryError, DeliveryTransition, NoBallDelivery, RunsDelivery, WicketDelivery, WideDelivery,
};
use crate::error::{ErrorSeverity, ScoringError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a delivery through the scoring engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("runs delivery failed: {0}")]
    Runs(TransitionPhaseError<<RunsDelivery as DeliveryTransition>::Error>),

    #[error("wicket delivery failed: {0}")]
    Wicket(TransitionPhaseError<<WicketDelivery as DeliveryTransition>::Error>),

    #[error("wide delivery failed: {0}")]
    Wide(TransitionPhaseError<<WideDelivery as DeliveryTransition>::Error>),

    #[error("no-ball delivery failed: {0}")]
    NoBall(TransitionPhaseError<<NoBallDelivery as DeliveryTransition>::Error>),

    #[error("innings cannot end: match is complete")]
    MatchComplete,
}

impl ExecuteError {
    /// Pipeline stage that failed, if a delivery was involved.
    pub fn phase(&self) -> Option<TransitionPhase> {
        self.phase_error().map(|error| error.phase)
    }

    pub fn delivery_error(&self) -> Option<&DeliveryError> {
        self.phase_error().map(|error| &error.error)
    }

    fn phase_error(&self) -> Option<&TransitionPhaseError<DeliveryError>> {
        match self {
            Self::Runs(error) | Self::Wicket(error) | Self::Wide(error) | Self::NoBall(error) => {
                Some(error)
            }
            Self::MatchComplete => None,
        }
    }
}

impl ScoringError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self.delivery_error() {
            Some(error) => error.severity(),
            None => ErrorSeverity::Ignored,
        }
    }

    fn error_code(&self) -> &'static str {
        match self.delivery_error() {
            Some(error) => error.error_code(),
            None => "EXECUTE_MATCH_COMPLETE",
        }
    }
}
