//! Delivery rejection errors.

use crate::error::{ErrorSeverity, ScoringError};

/// Reasons a delivery is not recorded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeliveryError {
    /// The match has finished; nothing more can be scored.
    #[error("match is complete")]
    MatchComplete,

    /// A batsman cannot be dismissed off a free hit.
    #[error("batsman reprieved: wicket on a free hit")]
    FreeHitReprieve,

    #[error("{runs} runs cannot be scored off one ball")]
    InvalidRuns { runs: u8 },

    #[error("{runs} runs off the bat is not a valid no-ball outcome")]
    InvalidBatRuns { runs: u8 },

    /// Striker and non-striker point at the same lineup slot.
    #[error("striker and non-striker share lineup slot {slot}")]
    CreaseCollision { slot: usize },

    #[error("{wickets} wickets exceeds the maximum of ten")]
    WicketsExceeded { wickets: u8 },

    #[error("{overs} overs exceeds the innings limit of {limit}")]
    OversExceeded { overs: u32, limit: u32 },
}

impl ScoringError for DeliveryError {
    fn severity(&self) -> ErrorSeverity {
        use DeliveryError::*;
        match self {
            MatchComplete | FreeHitReprieve => ErrorSeverity::Ignored,
            InvalidRuns { .. } | InvalidBatRuns { .. } => ErrorSeverity::Validation,
            CreaseCollision { .. } | WicketsExceeded { .. } | OversExceeded { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use DeliveryError::*;
        match self {
            MatchComplete => "DELIVERY_MATCH_COMPLETE",
            FreeHitReprieve => "DELIVERY_FREE_HIT_REPRIEVE",
            InvalidRuns { .. } => "DELIVERY_INVALID_RUNS",
            InvalidBatRuns { .. } => "DELIVERY_INVALID_BAT_RUNS",
            CreaseCollision { .. } => "DELIVERY_CREASE_COLLISION",
            WicketsExceeded { .. } => "DELIVERY_WICKETS_EXCEEDED",
            OversExceeded { .. } => "DELIVERY_OVERS_EXCEEDED",
        }
    }
}
