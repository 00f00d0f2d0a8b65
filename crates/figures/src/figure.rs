use crate::catalog::{flags_for_slug, slugify, FigureDetails, DETAILS};
use crate::company::CompanyType;
use crate::error::{FigureError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, BitXor};

const FIRE: u8 = 0b0001;
const AIR: u8 = 0b0010;
const WATER: u8 = 0b0100;
const EARTH: u8 = 0b1000;

/// Element composition of a figure, one flag per line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Elements {
    pub fire: bool,
    pub air: bool,
    pub water: bool,
    pub earth: bool,
}

impl Elements {
    /// Pack into the 4-bit ordinal
    pub const fn flags(self) -> u8 {
        (self.fire as u8)
            | (self.air as u8) << 1
            | (self.water as u8) << 2
            | (self.earth as u8) << 3
    }
}

/// A geomantic figure.
///
/// Figures are plain values over a 4-bit ordinal; two figures are equal iff
/// their element flags are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Figure(u8);

impl Figure {
    pub const POPULUS: Figure = Figure(0b0000);
    pub const LAETITIA: Figure = Figure(0b0001);
    pub const RUBEUS: Figure = Figure(0b0010);
    pub const FORTUNA_MINOR: Figure = Figure(0b0011);
    pub const ALBUS: Figure = Figure(0b0100);
    pub const AMISSO: Figure = Figure(0b0101);
    pub const CONJUNCTIO: Figure = Figure(0b0110);
    pub const CAUDA_DRACONIS: Figure = Figure(0b0111);
    pub const TRISTITIA: Figure = Figure(0b1000);
    pub const CARCER: Figure = Figure(0b1001);
    pub const ACQUISITIO: Figure = Figure(0b1010);
    pub const PUER: Figure = Figure(0b1011);
    pub const FORTUNA_MAJOR: Figure = Figure(0b1100);
    pub const PUELLA: Figure = Figure(0b1101);
    pub const CAPUT_DRACONIS: Figure = Figure(0b1110);
    pub const VIA: Figure = Figure(0b1111);

    /// Look up a figure by name, ignoring case and separators
    pub fn by_name(name: &str) -> Result<Self> {
        flags_for_slug(&slugify(name))
            .map(Figure)
            .ok_or_else(|| FigureError::not_found(name))
    }

    /// Look up a figure by its 4-bit ordinal
    pub fn by_flags(flags: u8) -> Result<Self> {
        if flags > 0b1111 {
            return Err(FigureError::not_found(format!("flags {flags:#06b}")));
        }
        Ok(Figure(flags))
    }

    /// Build a figure from its element composition
    pub fn by_elements(elements: Elements) -> Self {
        Figure(elements.flags())
    }

    /// All sixteen figures in ordinal order
    pub fn all() -> impl Iterator<Item = Figure> {
        (0..16u8).map(Figure)
    }

    /// Left-fold XOR over `figures`; Populus for an empty input
    pub fn combine<I>(figures: I) -> Self
    where
        I: IntoIterator<Item = Figure>,
    {
        figures.into_iter().fold(Figure::POPULUS, Add::add)
    }

    pub const fn flags(self) -> u8 {
        self.0
    }

    pub const fn fire(self) -> bool {
        self.0 & FIRE != 0
    }

    pub const fn air(self) -> bool {
        self.0 & AIR != 0
    }

    pub const fn water(self) -> bool {
        self.0 & WATER != 0
    }

    pub const fn earth(self) -> bool {
        self.0 & EARTH != 0
    }

    pub const fn elements(self) -> Elements {
        Elements {
            fire: self.fire(),
            air: self.air(),
            water: self.water(),
            earth: self.earth(),
        }
    }

    /// Line `ix` from the head down: fire, air, water, earth
    pub fn line(self, ix: usize) -> Result<bool> {
        match ix {
            0..=3 => Ok(self.0 & (1 << ix) != 0),
            _ => Err(FigureError::InvalidLine(ix)),
        }
    }

    pub fn details(self) -> &'static FigureDetails {
        &DETAILS[self.0 as usize]
    }

    pub fn name(self) -> &'static str {
        self.details().name
    }

    pub fn english(self) -> &'static str {
        self.details().english
    }

    pub fn slug(self) -> String {
        slugify(self.name())
    }

    /// Number of active (single-point) lines
    pub const fn active_points(self) -> u32 {
        self.0.count_ones()
    }

    /// Total points, counting one per active line and two per passive line
    pub const fn points(self) -> u32 {
        8 - self.active_points()
    }

    /// +1 if `house` is this figure's strong house, -1 if weak, else 0
    pub fn strength(self, house: usize) -> i32 {
        let details = self.details();
        if details.strong == house {
            1
        } else if details.weak == house {
            -1
        } else {
            0
        }
    }

    /// Classify the company this figure keeps with `other`
    pub fn company_type(self, other: Figure) -> Option<CompanyType> {
        CompanyType::classify(self, other)
    }
}

impl Add for Figure {
    type Output = Figure;

    fn add(self, other: Figure) -> Figure {
        Figure(self.0 ^ other.0)
    }
}

impl BitXor for Figure {
    type Output = Figure;

    fn bitxor(self, other: Figure) -> Figure {
        self + other
    }
}

impl Default for Figure {
    fn default() -> Self {
        Figure::POPULUS
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Figure({} {:04b})", self.name(), self.0)
    }
}

impl std::str::FromStr for Figure {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self> {
        Figure::by_name(s)
    }
}

impl Serialize for Figure {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Figure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Figure::by_name(&name).map_err(serde::de::Error::custom)
    }
}
