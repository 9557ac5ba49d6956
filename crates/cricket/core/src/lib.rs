//! Deterministic cricket scoring rules and data types.
//!
//! `cricket-core` defines the canonical scoring model (deliveries, engine,
//! match state, result) and exposes pure, synchronous APIs that the runtime
//! and front ends build on. All state mutation flows through
//! [`engine::ScoringEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod result;
pub mod state;

pub use action::{
    Delivered, Delivery, DeliveryError, DeliveryTransition, NoBallDelivery, RunsDelivery,
    WicketDelivery, WideDelivery,
};
pub use config::{MatchConfig, TossDecision};
pub use engine::{
    ExecuteError, ExecutionOutcome, InningsTransition, ScoringEngine, TransitionPhase,
    TransitionPhaseError,
};
pub use error::{ErrorSeverity, ScoringError};
pub use result::MatchResult;
pub use state::{
    BallKind, BallLog, BallRecord, Batsman, Crease, Innings, InningsContext, Lineup,
    MatchSnapshot, MatchState, ScoreDelta, ScoreFields, Scoreboard, SetupError, Team, TeamId,
};
