//! Utilities for reacting to runtime events inside UI layers.
use cricket_core::MatchState;
use runtime::{MatchController, MatchEvent};

use crate::config::FrontendConfig;
use crate::history::HistoryFeed;
use crate::view_model::{SummaryView, UiFrame};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
    /// Previously rendered output is stale and must be discarded.
    pub full_render: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            full_render: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            full_render: false,
        }
    }

    pub const fn full() -> Self {
        Self {
            requires_redraw: true,
            full_render: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            full_render: self.full_render || other.full_render,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &MatchEvent, state: Option<&MatchState>) -> EventImpact;
    fn history(&self) -> &HistoryFeed;
}

/// Turns controller events into frames for a [`crate::Frontend`].
#[derive(Clone, Debug)]
pub struct ScoreboardPresenter {
    history: HistoryFeed,
}

impl ScoreboardPresenter {
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            history: HistoryFeed::new(config.history.window),
        }
    }

    /// Current frame, or `None` when no match is configured.
    pub fn frame(&self, controller: &MatchController) -> Option<UiFrame> {
        let state = controller.state()?;
        Some(UiFrame::from_state(
            state,
            controller.can_undo(),
            &self.history,
        ))
    }

    pub fn summary(&self, controller: &MatchController) -> Option<SummaryView> {
        SummaryView::from_state(controller.state()?)
    }
}

impl EventConsumer for ScoreboardPresenter {
    fn on_event(&mut self, event: &MatchEvent, state: Option<&MatchState>) -> EventImpact {
        match event {
            MatchEvent::DeliveryRecorded { .. } => {
                if let Some(state) = state {
                    self.history.sync(state.ball_log());
                }
                EventImpact::redraw()
            }
            MatchEvent::DeliveryIgnored { .. } => EventImpact::none(),
            MatchEvent::InningsEnded { .. } | MatchEvent::MatchCompleted { .. } => {
                EventImpact::redraw()
            }
            MatchEvent::MatchStarted { .. } | MatchEvent::Undone { .. } => {
                match state {
                    Some(state) => self.history.rebuild(state.ball_log()),
                    None => self.history.clear(),
                }
                EventImpact::full()
            }
            MatchEvent::MatchReset => {
                self.history.clear();
                EventImpact::full()
            }
        }
    }

    fn history(&self) -> &HistoryFeed {
        &self.history
    }
}
