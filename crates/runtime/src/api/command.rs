use cricket_core::{Delivery, ExecuteError, InningsTransition};

/// Input accepted by [`crate::MatchController::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    Delivery(Delivery),
    Undo,
    EndInnings,
    /// Abandon the current match and return to setup.
    NewMatch,
}

impl Command {
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Command::Delivery(delivery) => delivery.as_snake_case(),
            Command::Undo => "undo",
            Command::EndInnings => "end_innings",
            Command::NewMatch => "new_match",
        }
    }
}

impl From<Delivery> for Command {
    fn from(delivery: Delivery) -> Self {
        Self::Delivery(delivery)
    }
}

/// What a command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// State changed and an undo snapshot was taken.
    Applied { transition: InningsTransition },
    /// The most recent snapshot was restored.
    Undone,
    /// The match was discarded.
    Reset,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl CommandOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// Why a command was a no-op.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum IgnoreReason {
    #[error("no match in progress")]
    NoMatch,

    #[error("match is complete")]
    MatchComplete,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error(transparent)]
    Rejected(ExecuteError),
}
