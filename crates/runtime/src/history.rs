//! Bounded undo history.

use std::collections::VecDeque;

use cricket_core::MatchSnapshot;

/// Stack of pre-command snapshots, newest last.
///
/// Holds at most `capacity` entries; pushing beyond that evicts the oldest.
#[derive(Clone, Debug)]
pub struct UndoHistory {
    entries: VecDeque<MatchSnapshot>,
    capacity: usize,
}

impl UndoHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Records the state before an accepted command.
    pub fn push(&mut self, snapshot: MatchSnapshot) {
        self.entries.push_back(snapshot);

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            tracing::debug!(capacity = self.capacity, "Oldest undo snapshot evicted");
        }

        tracing::debug!(undo_depth = self.entries.len(), "Undo snapshot pushed");
    }

    /// Takes the most recent snapshot.
    pub fn pop(&mut self) -> Option<MatchSnapshot> {
        let snapshot = self.entries.pop_back()?;
        tracing::debug!(undo_remaining = self.entries.len(), "Undo snapshot popped");
        Some(snapshot)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::{
        Delivery, Lineup, MatchConfig, MatchState, ScoringEngine, Team, TeamId, TossDecision,
    };

    fn state() -> MatchState {
        let lineup = |p: &str| Lineup::new((1..=10).map(|i| format!("{p} {i}"))).unwrap();
        MatchState::new(
            Team::new("Team A", lineup("A")),
            Team::new("Team B", lineup("B")),
            MatchConfig::new(6, TeamId::A, TossDecision::Bat),
        )
        .unwrap()
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut state = state();
        let mut history = UndoHistory::new(3);

        for _ in 0..5 {
            let outcome = ScoringEngine::new(&mut state)
                .execute(&Delivery::runs(2))
                .unwrap();
            history.push(outcome.before);
        }

        assert_eq!(history.len(), 3);
        // Oldest surviving snapshot predates the third delivery.
        let mut oldest = None;
        while let Some(snapshot) = history.pop() {
            oldest = Some(snapshot);
        }
        assert_eq!(oldest.unwrap().log_len(), 2);
        assert!(history.is_empty());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        assert_eq!(UndoHistory::new(0).capacity(), 1);
    }
}
