use super::{MatchState, Scoreboard};

/// Point-in-time copy of a [`MatchState`] for undo.
///
/// The ball log is append-only, so a snapshot keeps only its length and
/// restoring truncates back to it. The scoreboard is copied by value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSnapshot {
    board: Scoreboard,
    log_len: usize,
}

impl MatchSnapshot {
    pub fn capture(state: &MatchState) -> Self {
        Self {
            board: state.board.clone(),
            log_len: state.log.len(),
        }
    }

    /// Makes this snapshot the live state.
    pub fn restore(self, state: &mut MatchState) {
        state.board = self.board;
        state.log.truncate(self.log_len);
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.board
    }

    /// Ball log length when the snapshot was taken.
    pub fn log_len(&self) -> usize {
        self.log_len
    }
}
