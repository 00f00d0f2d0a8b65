use crate::figure::Figure;
use serde::{Deserialize, Serialize};
use std::fmt;

const DEMI_SIMPLE: &[&[Figure]] = &[
    &[Figure::CARCER, Figure::TRISTITIA, Figure::CAUDA_DRACONIS],
    &[Figure::ACQUISITIO, Figure::LAETITIA, Figure::CAPUT_DRACONIS],
    &[Figure::PUER, Figure::RUBEUS, Figure::CAUDA_DRACONIS],
    &[Figure::FORTUNA_MAJOR, Figure::FORTUNA_MINOR],
    &[Figure::AMISSO, Figure::PUELLA, Figure::CAPUT_DRACONIS],
    &[Figure::ALBUS, Figure::CONJUNCTIO],
    &[Figure::POPULUS, Figure::VIA],
];

const COMPOUND: &[&[Figure]] = &[
    &[Figure::PUER, Figure::PUELLA],
    &[Figure::AMISSO, Figure::ACQUISITIO],
    &[Figure::ALBUS, Figure::RUBEUS],
    &[Figure::POPULUS, Figure::VIA],
    &[Figure::FORTUNA_MAJOR, Figure::FORTUNA_MINOR],
    &[Figure::CONJUNCTIO, Figure::CARCER],
    &[Figure::TRISTITIA, Figure::LAETITIA],
    &[Figure::CAUDA_DRACONIS, Figure::CAPUT_DRACONIS],
];

/// Kind of company two figures keep
///
/// Ordered by precedence: when several apply, the first listed wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyType {
    /// The same figure
    Simple,

    /// Figures sharing a demi-simple family
    DemiSimple,

    /// Figures forming a compound pair
    Compound,

    /// Figures sharing the fire line
    Capitular,
}

impl CompanyType {
    pub(crate) fn classify(a: Figure, b: Figure) -> Option<Self> {
        if a == b {
            return Some(Self::Simple);
        }
        if shares_set(DEMI_SIMPLE, a, b) {
            return Some(Self::DemiSimple);
        }
        if shares_set(COMPOUND, a, b) {
            return Some(Self::Compound);
        }
        if a.fire() == b.fire() {
            return Some(Self::Capitular);
        }
        None
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CompanyType::Simple => "simple",
            CompanyType::DemiSimple => "demi-simple",
            CompanyType::Compound => "compound",
            CompanyType::Capitular => "capitular",
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn shares_set(sets: &[&[Figure]], a: Figure, b: Figure) -> bool {
    sets.iter().any(|set| set.contains(&a) && set.contains(&b))
}
