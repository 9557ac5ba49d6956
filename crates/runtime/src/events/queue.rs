use std::collections::VecDeque;

use super::MatchEvent;

/// FIFO of events waiting for the front end.
///
/// Commands run to completion synchronously, so instead of a broadcast
/// channel the controller queues events and the front end drains them after
/// each dispatch.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<MatchEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, event: MatchEvent) {
        tracing::trace!(?event, "Event queued");
        self.pending.push_back(event);
    }

    /// Removes and yields every pending event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = MatchEvent> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
