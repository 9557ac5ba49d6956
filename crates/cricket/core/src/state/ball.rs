//! Append-only ball-by-ball log.

use super::types::Innings;

/// Classification of a recorded delivery.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BallKind {
    Normal,
    Boundary,
    Wicket,
    Wide,
    #[strum(serialize = "noball")]
    NoBall,
}

impl BallKind {
    /// Illegal deliveries are re-bowled and do not advance the over.
    pub const fn is_extra(self) -> bool {
        matches!(self, Self::Wide | Self::NoBall)
    }
}

/// One entry in the ball-by-ball log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallRecord {
    pub innings: Innings,
    /// 1-based over number.
    pub over: u32,
    /// Position within the over (1–6).
    pub ball: u32,
    /// Striker who faced the delivery.
    pub batsman: String,
    /// Runs credited to the batting side by this delivery.
    pub runs: u32,
    pub kind: BallKind,
    /// Runs off the bat on a no-ball.
    pub bat_runs: Option<u32>,
    pub free_hit: bool,
    /// Team total after the delivery.
    pub total: u32,
    /// Team wickets after the delivery.
    pub wickets: u8,
}

/// Ordered, append-only sequence of [`BallRecord`]s.
///
/// Records are only added by the scoring engine and only removed by
/// restoring a snapshot, which truncates back to an earlier length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BallLog {
    records: Vec<BallRecord>,
}

impl BallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: BallRecord) {
        self.records.push(record);
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        debug_assert!(len <= self.records.len(), "snapshot newer than log");
        self.records.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&BallRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BallRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[BallRecord] {
        &self.records
    }

    /// Records appended at or after `index`, for incremental rendering.
    ///
    /// Returns an empty slice when `index` is past the end.
    pub fn since(&self, index: usize) -> &[BallRecord] {
        self.records.get(index..).unwrap_or_default()
    }

    /// Records belonging to one innings.
    pub fn innings(&self, innings: Innings) -> impl Iterator<Item = &BallRecord> {
        self.records.iter().filter(move |record| record.innings == innings)
    }
}

impl FromIterator<BallRecord> for BallLog {
    fn from_iter<I: IntoIterator<Item = BallRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BallLog {
    type Item = &'a BallRecord;
    type IntoIter = std::slice::Iter<'a, BallRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
