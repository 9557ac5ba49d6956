use arrayvec::ArrayVec;

use crate::config::MatchConfig;
use crate::state::SetupError;

/// Batting order of a side, fixed once the match is configured.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lineup {
    players: ArrayVec<String, { MatchConfig::MAX_PLAYERS }>,
}

impl Lineup {
    /// Builds a lineup in batting order.
    ///
    /// Fails if fewer than two players are given (no one to open with) or
    /// more than a side may field.
    pub fn new<I, S>(players: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lineup = ArrayVec::new();
        for player in players {
            lineup
                .try_push(player.into())
                .map_err(|_| SetupError::LineupTooLarge {
                    max: MatchConfig::MAX_PLAYERS,
                })?;
        }

        if lineup.len() < MatchConfig::MIN_PLAYERS {
            return Err(SetupError::LineupTooSmall {
                count: lineup.len(),
                min: MatchConfig::MIN_PLAYERS,
            });
        }

        Ok(Self { players: lineup })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.players.get(slot).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }
}

/// One side of the match and its innings tally.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    name: String,
    lineup: Lineup,
    pub(crate) score: u32,
    pub(crate) wickets: u8,
    /// Cumulative legal deliveries faced. Overs are derived from this.
    pub(crate) legal_balls: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, lineup: Lineup) -> Self {
        Self {
            name: name.into(),
            lineup,
            score: 0,
            wickets: 0,
            legal_balls: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lineup(&self) -> &Lineup {
        &self.lineup
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wickets(&self) -> u8 {
        self.wickets
    }

    pub fn legal_balls(&self) -> u32 {
        self.legal_balls
    }

    /// Completed overs. Always `legal_balls / 6`.
    pub fn overs_completed(&self) -> u32 {
        self.legal_balls / MatchConfig::BALLS_PER_OVER
    }

    /// Legal deliveries bowled in the over in progress (0–5).
    pub fn balls_in_over(&self) -> u32 {
        self.legal_balls % MatchConfig::BALLS_PER_OVER
    }

    /// True when the last legal delivery completed an over.
    pub fn at_over_boundary(&self) -> bool {
        self.legal_balls > 0 && self.balls_in_over() == 0
    }

    /// All out: ten wickets, or too few batsmen left to form a pair.
    pub fn is_all_out(&self) -> bool {
        let wickets = usize::from(self.wickets);
        self.wickets >= MatchConfig::MAX_WICKETS || wickets + 1 >= self.lineup.len()
    }

    /// Wickets still in hand, counted against the full ten.
    pub fn wickets_in_hand(&self) -> u8 {
        MatchConfig::MAX_WICKETS.saturating_sub(self.wickets)
    }
}
