//! Single entry point for mutating a match.
//!
//! [`MatchController`] owns the live [`MatchState`], its undo history and
//! the event queue. Every command runs to completion before the next; each
//! accepted command pushes the pre-command snapshot so it can be undone.

use std::io::Write;
use std::path::Path;

use cricket_core::{
    Delivery, ErrorSeverity, ExecutionOutcome, Innings, InningsTransition, MatchConfig,
    MatchState, ScoringEngine, ScoringError, Team,
};

use crate::api::{Command, CommandOutcome, ExportError, IgnoreReason, Result};
use crate::config::RuntimeConfig;
use crate::events::{EventQueue, MatchEvent};
use crate::export;
use crate::history::UndoHistory;

pub struct MatchController {
    config: RuntimeConfig,
    state: Option<MatchState>,
    history: UndoHistory,
    events: EventQueue,
}

impl Default for MatchController {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}

impl MatchController {
    pub fn new(config: RuntimeConfig) -> Self {
        let history = UndoHistory::new(config.undo_depth);
        Self {
            config,
            state: None,
            history,
            events: EventQueue::new(),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Builds a match from setup input and starts it.
    pub fn configure(&mut self, team_a: Team, team_b: Team, config: MatchConfig) -> Result<()> {
        let state = MatchState::new(team_a, team_b, config)?;
        self.start(state);
        Ok(())
    }

    /// Makes `state` the live match, discarding any previous one.
    pub fn start(&mut self, state: MatchState) {
        let batting = state.innings().batting;
        let total_overs = state.config().total_overs;
        tracing::info!(
            batting = %state.batting_team().name(),
            total_overs,
            "Match started"
        );

        self.history.clear();
        self.state = Some(state);
        self.events.publish(MatchEvent::MatchStarted {
            batting,
            total_overs,
        });
    }

    pub fn state(&self) -> Option<&MatchState> {
        self.state.as_ref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Undo is offered only while the match is live and history exists.
    pub fn can_undo(&self) -> bool {
        self.state.as_ref().is_some_and(|state| !state.is_complete()) && !self.history.is_empty()
    }

    /// Result line once the match is complete.
    pub fn summary(&self) -> Option<String> {
        let state = self.state.as_ref()?;
        state.result().map(|result| result.describe(state))
    }

    pub fn dispatch(&mut self, command: Command) -> CommandOutcome {
        tracing::debug!(command = command.as_snake_case(), "Dispatching command");

        match command {
            Command::Delivery(delivery) => self.record(delivery),
            Command::Undo => self.undo(),
            Command::EndInnings => self.end_innings(),
            Command::NewMatch => self.reset(),
        }
    }

    /// Removes and yields queued events, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = MatchEvent> + '_ {
        self.events.drain()
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> Result<()> {
        let state = self.state.as_ref().ok_or(ExportError::NoMatch)?;
        export::write_csv(state.ball_log(), writer)?;
        Ok(())
    }

    /// The ball log as one CSV document, ready for a download.
    pub fn export_string(&self) -> Result<String> {
        let state = self.state.as_ref().ok_or(ExportError::NoMatch)?;
        Ok(export::to_csv_string(state.ball_log())?)
    }

    pub fn export_to_path(&self, path: &Path) -> Result<()> {
        let state = self.state.as_ref().ok_or(ExportError::NoMatch)?;
        export::export_to_path(state.ball_log(), path)?;
        Ok(())
    }

    fn record(&mut self, delivery: Delivery) -> CommandOutcome {
        let Some(state) = self.state.as_mut() else {
            return self.ignore_delivery(delivery, IgnoreReason::NoMatch);
        };

        let executed = ScoringEngine::new(state).execute(&delivery);
        match executed {
            Ok(outcome) => {
                let transition = outcome.transition;
                accept(&mut self.history, &mut self.events, state, outcome);
                CommandOutcome::Applied { transition }
            }
            Err(error) => {
                match error.severity() {
                    ErrorSeverity::Ignored => tracing::debug!(
                        delivery = delivery.as_snake_case(),
                        code = error.error_code(),
                        "Delivery ignored"
                    ),
                    ErrorSeverity::Validation => tracing::warn!(
                        delivery = delivery.as_snake_case(),
                        code = error.error_code(),
                        %error,
                        "Delivery rejected"
                    ),
                    ErrorSeverity::Internal => tracing::error!(
                        delivery = delivery.as_snake_case(),
                        code = error.error_code(),
                        phase = ?error.phase(),
                        %error,
                        "Delivery rolled back"
                    ),
                }
                self.ignore_delivery(delivery, IgnoreReason::Rejected(error))
            }
        }
    }

    fn end_innings(&mut self) -> CommandOutcome {
        let Some(state) = self.state.as_mut() else {
            return ignore("end_innings", IgnoreReason::NoMatch);
        };

        let executed = ScoringEngine::new(state).end_innings();
        match executed {
            Ok(outcome) => {
                let transition = outcome.transition;
                accept(&mut self.history, &mut self.events, state, outcome);
                CommandOutcome::Applied { transition }
            }
            Err(_) => ignore("end_innings", IgnoreReason::MatchComplete),
        }
    }

    fn undo(&mut self) -> CommandOutcome {
        let Some(state) = self.state.as_mut() else {
            return ignore("undo", IgnoreReason::NoMatch);
        };
        if state.is_complete() {
            return ignore("undo", IgnoreReason::MatchComplete);
        }
        let Some(snapshot) = self.history.pop() else {
            return ignore("undo", IgnoreReason::NothingToUndo);
        };

        snapshot.restore(state);
        let history_len = self.history.len();
        tracing::info!(
            history_len,
            log_len = state.ball_log().len(),
            "Undo restored snapshot"
        );
        self.events.publish(MatchEvent::Undone { history_len });
        CommandOutcome::Undone
    }

    fn reset(&mut self) -> CommandOutcome {
        self.state = None;
        self.history.clear();
        tracing::info!("Match reset");
        self.events.publish(MatchEvent::MatchReset);
        CommandOutcome::Reset
    }

    fn ignore_delivery(&mut self, delivery: Delivery, reason: IgnoreReason) -> CommandOutcome {
        self.events.publish(MatchEvent::DeliveryIgnored {
            delivery,
            reason: reason.clone(),
        });
        CommandOutcome::Ignored(reason)
    }
}

fn ignore(command: &'static str, reason: IgnoreReason) -> CommandOutcome {
    tracing::debug!(command, %reason, "Command ignored");
    CommandOutcome::Ignored(reason)
}

/// Makes an accepted command undoable and announces what it did.
fn accept(
    history: &mut UndoHistory,
    events: &mut EventQueue,
    state: &MatchState,
    outcome: ExecutionOutcome,
) {
    history.push(outcome.before);

    if let Some(record) = outcome.record {
        tracing::debug!(
            kind = %record.kind,
            runs = record.runs,
            total = record.total,
            wickets = record.wickets,
            "Delivery recorded"
        );
        events.publish(MatchEvent::DeliveryRecorded {
            record,
            transition: outcome.transition,
            delta: outcome.delta,
        });
    }

    match outcome.transition {
        InningsTransition::Continue | InningsTransition::OverCompleted => {}
        InningsTransition::InningsEnded => {
            let batting = state.innings().batting;
            tracing::info!(
                batting = %state.batting_team().name(),
                target = state.target(),
                "First innings ended"
            );
            events.publish(MatchEvent::InningsEnded {
                innings: Innings::First,
                batting,
            });
        }
        InningsTransition::MatchEnded => {
            if let Some(result) = state.result().copied() {
                let summary = result.describe(state);
                tracing::info!(%summary, "Match completed");
                events.publish(MatchEvent::MatchCompleted { result, summary });
            }
        }
    }
}
