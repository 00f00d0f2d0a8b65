use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of relationship found between querent and quesited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicationKind {
    Occupation,
    Conjunction,
    Spring,
    Mutation,
    Translation,
    Trine,
    Square,
    Sextile,
    Opposition,
    Impedition,
}

impl IndicationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            IndicationKind::Occupation => "occupation",
            IndicationKind::Conjunction => "conjunction",
            IndicationKind::Spring => "spring",
            IndicationKind::Mutation => "mutation",
            IndicationKind::Translation => "translation",
            IndicationKind::Trine => "trine",
            IndicationKind::Square => "square",
            IndicationKind::Sextile => "sextile",
            IndicationKind::Opposition => "opposition",
            IndicationKind::Impedition => "impedition",
        }
    }
}

impl fmt::Display for IndicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four aspects, a subset of [`IndicationKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Trine,
    Square,
    Sextile,
    Opposition,
}

impl Aspect {
    pub const fn kind(self) -> IndicationKind {
        match self {
            Aspect::Trine => IndicationKind::Trine,
            Aspect::Square => IndicationKind::Square,
            Aspect::Sextile => IndicationKind::Sextile,
            Aspect::Opposition => IndicationKind::Opposition,
        }
    }

    pub const fn as_str(self) -> &'static str {
        self.kind().as_str()
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One indication between two house positions.
///
/// `querent` is the position standing for the querent's side and `quesited`
/// the position standing for the quesited's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hit {
    pub querent: usize,
    pub quesited: usize,
    pub weight: i32,
}

impl Hit {
    pub const fn new(querent: usize, quesited: usize, weight: i32) -> Self {
        Self {
            querent,
            quesited,
            weight,
        }
    }
}

/// Side of the querent-side house on which the other house falls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Sinister,
    Dexter,
    /// Same house or exact opposition
    None,
}

/// An aspect between two house positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectHit {
    pub direction: Direction,
    pub querent: usize,
    pub quesited: usize,
    pub weight: i32,
}

/// Hits split by the side they were found from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sided {
    pub querent: Vec<Hit>,
    pub quesited: Vec<Hit>,
}

impl Sided {
    pub fn is_empty(&self) -> bool {
        self.querent.is_empty() && self.quesited.is_empty()
    }

    fn merge(&mut self, other: Sided) {
        add_unique(&mut self.querent, other.querent);
        add_unique(&mut self.quesited, other.quesited);
    }

    fn weights(&self) -> impl Iterator<Item = i32> + '_ {
        hit_weights(&self.querent).chain(hit_weights(&self.quesited))
    }
}

/// Every indication found for a querent/quesited pair, keyed by kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indications {
    pub occupation: Vec<Hit>,
    pub conjunction: Sided,
    pub springs: Sided,
    pub mutation: Vec<Hit>,
    pub translation: Vec<Hit>,
    pub trine: Vec<AspectHit>,
    pub square: Vec<AspectHit>,
    pub sextile: Vec<AspectHit>,
    pub opposition: Vec<AspectHit>,
    pub impedition: Vec<Hit>,
}

impl Indications {
    /// Append `hit` to the list for `aspect`
    pub fn push_aspect(&mut self, aspect: Aspect, hit: AspectHit) {
        let list = match aspect {
            Aspect::Trine => &mut self.trine,
            Aspect::Square => &mut self.square,
            Aspect::Sextile => &mut self.sextile,
            Aspect::Opposition => &mut self.opposition,
        };
        list.push(hit);
    }

    /// Fold `other` into this report, skipping entries already present
    pub fn merge(&mut self, other: Indications) {
        add_unique(&mut self.occupation, other.occupation);
        self.conjunction.merge(other.conjunction);
        self.springs.merge(other.springs);
        add_unique(&mut self.mutation, other.mutation);
        add_unique(&mut self.translation, other.translation);
        add_unique(&mut self.trine, other.trine);
        add_unique(&mut self.square, other.square);
        add_unique(&mut self.sextile, other.sextile);
        add_unique(&mut self.opposition, other.opposition);
        add_unique(&mut self.impedition, other.impedition);
    }

    /// Weights of every indication in the report
    pub fn weights(&self) -> impl Iterator<Item = i32> + '_ {
        hit_weights(&self.occupation)
            .chain(self.conjunction.weights())
            .chain(self.springs.weights())
            .chain(hit_weights(&self.mutation))
            .chain(hit_weights(&self.translation))
            .chain(aspect_weights(&self.trine))
            .chain(aspect_weights(&self.square))
            .chain(aspect_weights(&self.sextile))
            .chain(aspect_weights(&self.opposition))
            .chain(hit_weights(&self.impedition))
    }

    /// Summed weight of the whole report
    pub fn weight(&self) -> i32 {
        self.weights().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.occupation.is_empty()
            && self.conjunction.is_empty()
            && self.springs.is_empty()
            && self.mutation.is_empty()
            && self.translation.is_empty()
            && self.trine.is_empty()
            && self.square.is_empty()
            && self.sextile.is_empty()
            && self.opposition.is_empty()
            && self.impedition.is_empty()
    }

    pub fn is_impeded(&self) -> bool {
        !self.impedition.is_empty()
    }
}

fn hit_weights(list: &[Hit]) -> impl Iterator<Item = i32> + '_ {
    list.iter().map(|hit| hit.weight)
}

fn aspect_weights(list: &[AspectHit]) -> impl Iterator<Item = i32> + '_ {
    list.iter().map(|hit| hit.weight)
}

/// Extend `target` with the items of `items` it does not already hold
pub fn add_unique<T: PartialEq>(target: &mut Vec<T>, items: impl IntoIterator<Item = T>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}
