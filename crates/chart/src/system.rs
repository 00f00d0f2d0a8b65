use crate::error::{ChartError, Result};
use crate::sequence::SHIELD_SLOTS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mapping from house position onto the shield slot that backs it.
///
/// Positions 12-14 (witnesses and judge) are never remapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    /// Houses 1-12 are the mothers, daughters and nieces in order
    #[default]
    Ordinary,

    /// Mothers on the angles, daughters succedent, nieces cadent
    Astrological,
}

const ORDINARY: [usize; SHIELD_SLOTS] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];
const ASTROLOGICAL: [usize; SHIELD_SLOTS] = [1, 5, 9, 2, 6, 10, 3, 7, 11, 0, 4, 8, 12, 13, 14];

impl HouseSystem {
    pub const ALL: [HouseSystem; 2] = [HouseSystem::Ordinary, HouseSystem::Astrological];

    /// Case-insensitive lookup by name
    pub fn by_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|system| system.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ChartError::InvalidHouseType(name.to_string()))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HouseSystem::Ordinary => "ordinary",
            HouseSystem::Astrological => "astrological",
        }
    }

    const fn table(self) -> &'static [usize; SHIELD_SLOTS] {
        match self {
            HouseSystem::Ordinary => &ORDINARY,
            HouseSystem::Astrological => &ASTROLOGICAL,
        }
    }

    /// Shield slot backing house `position`
    pub fn slot_for(self, position: usize) -> Result<usize> {
        self.table()
            .get(position)
            .copied()
            .ok_or(ChartError::InvalidIndex(position))
    }

    /// House position that displays shield slot `slot`
    pub fn position_for(self, slot: usize) -> Result<usize> {
        self.table()
            .iter()
            .position(|&backing| backing == slot)
            .ok_or(ChartError::InvalidIndex(slot))
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HouseSystem {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        Self::by_name(s)
    }
}
