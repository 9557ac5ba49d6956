use super::team::Lineup;

/// A batsman currently at the crease.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Batsman {
    /// Position in the batting lineup.
    pub slot: usize,
    pub name: String,
    pub runs: u32,
    pub balls: u32,
}

impl Batsman {
    /// A fresh batsman walking in from the given lineup slot.
    pub fn new(slot: usize, name: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
            runs: 0,
            balls: 0,
        }
    }

    fn from_lineup(lineup: &Lineup, slot: usize) -> Self {
        Self::new(slot, lineup.get(slot).unwrap_or_default())
    }
}

/// The striker and non-striker pair.
///
/// Invariant: `striker.slot != non_striker.slot`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crease {
    pub striker: Batsman,
    pub non_striker: Batsman,
}

impl Crease {
    /// Seats the openers (lineup slots 0 and 1).
    pub fn openers(lineup: &Lineup) -> Self {
        Self {
            striker: Batsman::from_lineup(lineup, 0),
            non_striker: Batsman::from_lineup(lineup, 1),
        }
    }

    /// Swaps striker and non-striker.
    pub fn rotate_strike(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
    }

    /// Sends the lineup's `slot` player in to replace the striker.
    pub fn replace_striker(&mut self, lineup: &Lineup, slot: usize) {
        self.striker = Batsman::from_lineup(lineup, slot);
    }

    pub fn is_consistent(&self) -> bool {
        self.striker.slot != self.non_striker.slot
    }
}
