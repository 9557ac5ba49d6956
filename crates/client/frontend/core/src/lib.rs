//! Cross-frontend primitives for presenting a cricket match.
//!
//! Houses setup defaults, event handling, history rendering and view-model
//! types that any concrete UI can reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod history;
pub mod setup;
pub mod view_model;

pub use config::{FrontendConfig, HistoryConfig, SetupConfig};
pub use event::{EventConsumer, EventImpact, ScoreboardPresenter};
pub use frontend::{Frontend, Session};
pub use history::{EntryStyle, HistoryEntry, HistoryFeed};
pub use setup::SetupForm;
pub use view_model::{
    BatsmanView, ChaseView, Controls, HeaderView, ScoreView, SummaryView, TeamSummary, UiFrame,
};
