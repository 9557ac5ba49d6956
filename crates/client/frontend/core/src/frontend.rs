//! Trait describing a client front end and the session that drives it.
use anyhow::Result;
use runtime::{Command, CommandOutcome, MatchController, MatchEvent, RuntimeConfig};

use crate::config::FrontendConfig;
use crate::event::{EventConsumer, EventImpact, ScoreboardPresenter};
use crate::setup::SetupForm;
use crate::view_model::{SummaryView, UiFrame};

/// Frontend abstraction for UI layers.
///
/// Frontends only draw. Input goes through [`Session::submit`], which
/// mutates the match and then calls back here with whatever needs
/// redrawing.
pub trait Frontend {
    /// Draws the scoring screen.
    ///
    /// `frame.history` holds the visible window; when `full` is false only
    /// its tail is new since the previous call.
    fn render(&mut self, frame: &UiFrame, full: bool) -> Result<()>;

    /// Shows the end-of-match screen.
    fn show_summary(&mut self, summary: &SummaryView) -> Result<()>;

    /// Returns to the setup screens after the match is discarded.
    fn show_setup(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Couples a [`MatchController`] with a [`Frontend`].
pub struct Session<F> {
    config: FrontendConfig,
    controller: MatchController,
    presenter: ScoreboardPresenter,
    frontend: F,
}

impl<F: Frontend> Session<F> {
    pub fn new(runtime: RuntimeConfig, config: FrontendConfig, frontend: F) -> Self {
        let presenter = ScoreboardPresenter::new(&config);
        Self {
            config,
            controller: MatchController::new(runtime),
            presenter,
            frontend,
        }
    }

    /// Starts a match from the setup form.
    pub fn start(&mut self, form: SetupForm) -> Result<()> {
        let state = form.into_match_state(&self.config.setup)?;
        self.controller.start(state);
        self.flush()
    }

    pub fn submit(&mut self, command: Command) -> Result<CommandOutcome> {
        let outcome = self.controller.dispatch(command);
        self.flush()?;
        Ok(outcome)
    }

    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    pub fn into_frontend(self) -> F {
        self.frontend
    }

    /// Feeds queued events to the presenter and redraws once.
    fn flush(&mut self) -> Result<()> {
        let events: Vec<MatchEvent> = self.controller.drain_events().collect();
        let mut impact = EventImpact::none();
        let mut completed = false;
        let mut reset = false;

        for event in &events {
            impact = impact.combine(self.presenter.on_event(event, self.controller.state()));
            completed |= matches!(event, MatchEvent::MatchCompleted { .. });
            reset |= matches!(event, MatchEvent::MatchReset);
        }

        if impact.requires_redraw {
            if let Some(frame) = self.presenter.frame(&self.controller) {
                self.frontend.render(&frame, impact.full_render)?;
            }
        }
        if completed {
            if let Some(summary) = self.presenter.summary(&self.controller) {
                self.frontend.show_summary(&summary)?;
            }
        }
        if reset && self.controller.state().is_none() {
            tracing::debug!("Returning to setup");
            self.frontend.show_setup()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::Delivery;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(UiFrame, bool)>,
        summaries: Vec<SummaryView>,
        setups: usize,
    }

    impl Frontend for Recorder {
        fn render(&mut self, frame: &UiFrame, full: bool) -> Result<()> {
            self.frames.push((frame.clone(), full));
            Ok(())
        }

        fn show_summary(&mut self, summary: &SummaryView) -> Result<()> {
            self.summaries.push(summary.clone());
            Ok(())
        }

        fn show_setup(&mut self) -> Result<()> {
            self.setups += 1;
            Ok(())
        }
    }

    fn session(overs: &str) -> Session<Recorder> {
        let mut session = Session::new(
            RuntimeConfig::default(),
            FrontendConfig::default(),
            Recorder::default(),
        );
        let form = SetupForm {
            overs: overs.into(),
            ..SetupForm::default()
        };
        session.start(form).unwrap();
        session
    }

    #[test]
    fn start_renders_full_frame() {
        let session = session("2");
        let (frame, full) = session.frontend().frames.last().unwrap();
        assert!(full);
        assert_eq!(frame.header.format, "2 Overs Match");
        assert_eq!(frame.striker.name, "Player 1");
    }

    #[test]
    fn match_completion_shows_summary() {
        let mut session = session("1");
        for _ in 0..6 {
            session.submit(Command::Delivery(Delivery::runs(1))).unwrap();
        }
        for _ in 0..6 {
            session.submit(Command::Delivery(Delivery::runs(0))).unwrap();
        }

        let summaries = &session.frontend().summaries;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].result, "Team A won by 6 runs");
        assert_eq!(summaries[0].teams[1].line, "0/0 (1.0 overs)");
    }

    #[test]
    fn ignored_command_draws_nothing() {
        let mut session = session("2");
        let drawn = session.frontend().frames.len();
        let outcome = session.submit(Command::Undo).unwrap();
        assert!(outcome.is_ignored());
        assert_eq!(session.frontend().frames.len(), drawn);
    }

    #[test]
    fn new_match_returns_to_setup() {
        let mut session = session("2");
        session.submit(Command::NewMatch).unwrap();
        assert_eq!(session.frontend().setups, 1);
        assert!(session.controller().state().is_none());
    }
}
