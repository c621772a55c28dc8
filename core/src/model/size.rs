use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{AddAssign, Index};
use std::str::FromStr;

use crate::error::DataError;

/// Egg size grade as printed on the sorter output, `0` (largest) to `5`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EggSize {
    #[serde(rename = "0")]
    Size0,
    #[serde(rename = "1")]
    Size1,
    #[serde(rename = "2")]
    Size2,
    #[serde(rename = "3")]
    Size3,
    #[serde(rename = "4")]
    Size4,
    #[serde(rename = "5")]
    Size5,
}

impl EggSize {
    pub const COUNT: usize = 6;

    /// Display order used by every breakdown.
    pub const ALL: [EggSize; EggSize::COUNT] = [
        EggSize::Size0,
        EggSize::Size1,
        EggSize::Size2,
        EggSize::Size3,
        EggSize::Size4,
        EggSize::Size5,
    ];

    pub fn index(self) -> usize {
        match self {
            EggSize::Size0 => 0,
            EggSize::Size1 => 1,
            EggSize::Size2 => 2,
            EggSize::Size3 => 3,
            EggSize::Size4 => 4,
            EggSize::Size5 => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EggSize::Size0 => "0",
            EggSize::Size1 => "1",
            EggSize::Size2 => "2",
            EggSize::Size3 => "3",
            EggSize::Size4 => "4",
            EggSize::Size5 => "5",
        }
    }
}

impl fmt::Display for EggSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EggSize {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EggSize::ALL
            .into_iter()
            .find(|size| size.label() == s.trim())
            .ok_or_else(|| DataError::UnknownSize(s.to_string()))
    }
}

/// Unit counts per size grade.
///
/// Stored as a fixed array indexed by [`EggSize`], so building one in code
/// needs all six counts. On disk it is a JSON object keyed `"0"`..`"5"`;
/// a missing key reads as zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "BTreeMap<String, u64>", into = "BTreeMap<String, u64>")]
pub struct Breakdown([u64; EggSize::COUNT]);

impl Breakdown {
    pub fn new(counts: [u64; EggSize::COUNT]) -> Self {
        Self(counts)
    }

    pub fn get(&self, size: EggSize) -> u64 {
        self.0[size.index()]
    }

    /// Sum of all six counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, &count| acc.saturating_add(count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EggSize, u64)> + '_ {
        EggSize::ALL.into_iter().map(move |size| (size, self.get(size)))
    }
}

impl Index<EggSize> for Breakdown {
    type Output = u64;

    fn index(&self, size: EggSize) -> &u64 {
        &self.0[size.index()]
    }
}

impl AddAssign<&Breakdown> for Breakdown {
    fn add_assign(&mut self, other: &Breakdown) {
        for (slot, count) in self.0.iter_mut().zip(other.0.iter()) {
            *slot = slot.saturating_add(*count);
        }
    }
}

impl TryFrom<BTreeMap<String, u64>> for Breakdown {
    type Error = DataError;

    fn try_from(map: BTreeMap<String, u64>) -> Result<Self, Self::Error> {
        let mut counts = [0; EggSize::COUNT];
        for (key, count) in map {
            let size: EggSize = key.parse()?;
            counts[size.index()] = count;
        }
        Ok(Self(counts))
    }
}

impl From<Breakdown> for BTreeMap<String, u64> {
    fn from(breakdown: Breakdown) -> Self {
        breakdown
            .iter()
            .map(|(size, count)| (size.label().to_string(), count))
            .collect()
    }
}
