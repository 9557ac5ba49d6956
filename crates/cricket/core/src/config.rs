use crate::state::TeamId;

/// Outcome of the toss: whether the winner elected to bat or bowl first.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TossDecision {
    #[default]
    Bat,
    Bowl,
}

/// Match format and toss result, fixed once the match starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Overs available to each side. Always positive.
    pub total_overs: u32,
    pub toss_winner: TeamId,
    pub toss_decision: TossDecision,
}

impl MatchConfig {
    // ===== rules of the game =====
    pub const BALLS_PER_OVER: u32 = 6;
    /// Wickets that end an innings regardless of lineup size.
    pub const MAX_WICKETS: u8 = 10;
    /// Eleven players is the most a side can field.
    pub const MAX_PLAYERS: usize = 11;
    /// Two batsmen are needed to open an innings.
    pub const MIN_PLAYERS: usize = 2;

    // ===== adapter defaults =====
    /// Players collected per side by the setup form.
    pub const SQUAD_SIZE: usize = 10;
    pub const DEFAULT_TOTAL_OVERS: u32 = 6;
    /// Depth of the undo stack.
    pub const UNDO_DEPTH: usize = 10;

    pub fn new(total_overs: u32, toss_winner: TeamId, toss_decision: TossDecision) -> Self {
        Self {
            total_overs,
            toss_winner,
            toss_decision,
        }
    }

    /// Team that bats in the first innings.
    pub fn batting_first(&self) -> TeamId {
        match self.toss_decision {
            TossDecision::Bat => self.toss_winner,
            TossDecision::Bowl => self.toss_winner.other(),
        }
    }

    /// Legal deliveries available to each innings.
    pub fn balls_per_innings(&self) -> u32 {
        self.total_overs * Self::BALLS_PER_OVER
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOTAL_OVERS, TeamId::A, TossDecision::Bat)
    }
}
