//! Incremental ball-by-ball history for display.
use std::collections::VecDeque;

use cricket_core::{BallKind, BallLog, BallRecord};

use crate::format;

/// Visual category of a history line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStyle {
    Plain,
    Boundary,
    Wicket,
    Extra,
}

impl From<BallKind> for EntryStyle {
    fn from(kind: BallKind) -> Self {
        match kind {
            BallKind::Normal => Self::Plain,
            BallKind::Boundary => Self::Boundary,
            BallKind::Wicket => Self::Wicket,
            BallKind::Wide | BallKind::NoBall => Self::Extra,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub text: String,
    pub style: EntryStyle,
}

impl HistoryEntry {
    pub fn from_record(record: &BallRecord) -> Self {
        Self {
            text: format::history_line(record),
            style: record.kind.into(),
        }
    }
}

/// The most recent history lines, kept in step with the ball log.
///
/// Only records appended since the last sync are formatted. When the log
/// shrinks (undo) or is replaced, the feed is rebuilt from scratch.
#[derive(Clone, Debug)]
pub struct HistoryFeed {
    entries: VecDeque<HistoryEntry>,
    window: usize,
    /// Log length already rendered.
    rendered: usize,
}

impl HistoryFeed {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            entries: VecDeque::with_capacity(window),
            window,
            rendered: 0,
        }
    }

    /// Appends lines for records not yet rendered and returns how many.
    pub fn sync(&mut self, log: &BallLog) -> usize {
        if log.len() < self.rendered {
            self.rebuild(log);
            return self.entries.len();
        }

        let fresh = log.since(self.rendered);
        for record in fresh {
            self.push(HistoryEntry::from_record(record));
        }
        self.rendered = log.len();
        fresh.len()
    }

    /// Discards every line and renders the tail of `log` again.
    pub fn rebuild(&mut self, log: &BallLog) {
        self.entries.clear();
        let start = log.len().saturating_sub(self.window);
        for record in log.since(start) {
            self.push(HistoryEntry::from_record(record));
        }
        self.rendered = log.len();
        tracing::debug!(lines = self.entries.len(), "History rebuilt");
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.rendered = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() == self.window {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }
}
