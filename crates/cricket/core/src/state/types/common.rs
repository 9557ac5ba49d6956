use std::fmt;

/// Identifies one of the two sides in a match.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TeamId {
    #[default]
    #[strum(serialize = "team_a", serialize = "a")]
    A,
    #[strum(serialize = "team_b", serialize = "b")]
    B,
}

impl TeamId {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// The opposing side.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("team_a"),
            Self::B => f.write_str("team_b"),
        }
    }
}

/// Which of the two innings is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Innings {
    #[default]
    First,
    Second,
}

impl Innings {
    /// 1-based innings number.
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    pub const fn is_second(self) -> bool {
        matches!(self, Self::Second)
    }
}

impl fmt::Display for Innings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("1st Innings"),
            Self::Second => f.write_str("2nd Innings"),
        }
    }
}
