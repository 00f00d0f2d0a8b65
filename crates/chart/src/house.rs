use geomancy_figures::{CompanyType, Figure};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Number of houses in a chart
pub const HOUSES: usize = 12;

/// Force `x` into the house range 0-11
pub fn house_range(x: isize) -> usize {
    x.rem_euclid(HOUSES as isize) as usize
}

/// A figure seen from its position in the chart.
///
/// Houses are values built fresh for every query; the geometry methods depend
/// only on `index` and never on the figure that occupies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct House {
    /// Position (0-11 for houses, 12-14 for the witnesses and the judge)
    pub index: usize,

    /// Figure occupying this position
    pub figure: Figure,

    /// Whether this house is the querent
    pub querent: bool,

    /// Whether this house is the quesited
    pub quesited: bool,
}

impl House {
    pub const fn new(index: usize, figure: Figure) -> Self {
        Self {
            index,
            figure,
            querent: false,
            quesited: false,
        }
    }

    /// Builder: mark as querent and/or quesited
    #[must_use]
    pub const fn marked(mut self, querent: bool, quesited: bool) -> Self {
        self.querent = querent;
        self.quesited = quesited;
        self
    }

    /// Position `delta` houses away, wrapping around the chart
    pub fn index_plus(&self, delta: isize) -> usize {
        house_range(self.index as isize + delta)
    }

    /// The house paired with this one (0-1, 2-3, 4-5, ...)
    pub fn companion(&self) -> usize {
        if self.index % 2 == 0 {
            self.index_plus(1)
        } else {
            self.index_plus(-1)
        }
    }

    pub fn trines(&self) -> [usize; 2] {
        [self.index_plus(4), self.index_plus(8)]
    }

    pub fn is_trine_to(&self, other: usize) -> bool {
        self.trines().contains(&wrap(other))
    }

    pub fn squares(&self) -> [usize; 2] {
        [self.index_plus(3), self.index_plus(-3)]
    }

    pub fn is_square_to(&self, other: usize) -> bool {
        self.squares().contains(&wrap(other))
    }

    pub fn sextiles(&self) -> [usize; 2] {
        [self.index_plus(2), self.index_plus(-2)]
    }

    pub fn is_sextile_to(&self, other: usize) -> bool {
        self.sextiles().contains(&wrap(other))
    }

    pub fn opposition(&self) -> usize {
        self.index_plus(6)
    }

    pub fn is_opposed_to(&self, other: usize) -> bool {
        self.opposition() == wrap(other)
    }

    /// The two houses on either side of this one
    pub fn neighbors(&self) -> [usize; 2] {
        [self.index_plus(-1), self.index_plus(1)]
    }

    pub fn is_next_to(&self, other: usize) -> bool {
        self.neighbors().contains(&wrap(other))
    }

    /// Positions this one is projected from; empty below the nieces
    pub fn parents(&self) -> Vec<usize> {
        if self.index < 8 {
            return Vec::new();
        }
        let first = (self.index - 8) * 2;
        vec![first, first + 1]
    }

    pub fn has_figure(&self, figure: Figure) -> bool {
        self.figure == figure
    }

    /// Whether `other` lies in the five houses following this one
    pub fn is_sinister_of(&self, other: usize) -> bool {
        let other = wrap(other);
        (1..6).any(|delta| self.index_plus(delta) == other)
    }

    /// Whether `other` lies in the five houses preceding this one
    pub fn is_dexter_of(&self, other: usize) -> bool {
        let other = wrap(other);
        other != self.index_plus(0)
            && other != self.opposition()
            && !self.is_sinister_of(other)
    }

    pub fn company_type(&self, other: &House) -> Option<CompanyType> {
        self.figure.company_type(other.figure)
    }

    /// Strength of the figure in this position
    pub fn strength(&self) -> i32 {
        self.figure.strength(self.index)
    }
}

/// Any position read on the twelve-house wheel
fn wrap(position: usize) -> usize {
    house_range(position as isize)
}

impl Serialize for House {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("House", 5)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("figure", &self.figure)?;
        state.serialize_field("querent", &self.querent)?;
        state.serialize_field("quesited", &self.quesited)?;
        state.serialize_field("strength", &self.strength())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house(index: usize) -> House {
        House::new(index, Figure::POPULUS)
    }

    #[test]
    fn test_house_range_wraps_negative() {
        assert_eq!(house_range(-1), 11);
        assert_eq!(house_range(-13), 11);
        assert_eq!(house_range(12), 0);
        assert_eq!(house_range(14), 2);
    }

    #[test]
    fn test_next_to() {
        assert!(house(6).is_next_to(5));
        assert!(house(6).is_next_to(7));
        assert!(!house(6).is_next_to(2));
        assert!(house(0).is_next_to(11));
        assert!(house(11).is_next_to(0));
    }

    #[test]
    fn test_aspects() {
        let h = house(0);
        assert_eq!(h.trines(), [4, 8]);
        assert_eq!(h.squares(), [3, 9]);
        assert_eq!(h.sextiles(), [2, 10]);
        assert_eq!(h.opposition(), 6);
        assert!(house(10).is_trine_to(2));
        assert!(house(10).is_square_to(1));
        assert!(house(10).is_sextile_to(0));
        assert!(house(10).is_opposed_to(4));
    }

    #[test]
    fn test_predicates_wrap_the_other_position() {
        let first = house(0);
        // 13 and 14 read as houses 1 and 2
        assert!(first.is_sinister_of(13));
        assert!(!first.is_dexter_of(13));
        assert!(!first.is_dexter_of(12));
        assert!(first.is_dexter_of(23));
        assert!(first.is_sextile_to(14));
        assert!(first.is_trine_to(16));
        assert!(first.is_square_to(15));
        assert!(first.is_opposed_to(18));
        assert!(first.is_next_to(13));
    }

    #[test]
    fn test_companion_pairs() {
        assert_eq!(house(0).companion(), 1);
        assert_eq!(house(1).companion(), 0);
        assert_eq!(house(6).companion(), 7);
        assert_eq!(house(11).companion(), 10);
    }

    #[test]
    fn test_parents() {
        assert!(house(7).parents().is_empty());
        assert_eq!(house(8).parents(), vec![0, 1]);
        assert_eq!(house(11).parents(), vec![6, 7]);
        assert_eq!(house(14).parents(), vec![12, 13]);
    }

    #[test]
    fn test_exactly_one_relation_holds() {
        for a in 0..HOUSES {
            for b in 0..HOUSES {
                let h = house(a);
                let relations = [
                    a == b,
                    h.is_opposed_to(b),
                    h.is_sinister_of(b),
                    h.is_dexter_of(b),
                ];
                assert_eq!(
                    relations.iter().filter(|r| **r).count(),
                    1,
                    "{a} -> {b}: {relations:?}"
                );
            }
        }
    }

    #[test]
    fn test_sinister_and_dexter() {
        assert!(house(0).is_sinister_of(2));
        assert!(house(0).is_dexter_of(9));
        assert!(!house(0).is_dexter_of(6));
        assert!(house(10).is_sinister_of(1));
    }

    #[test]
    fn test_strength_follows_figure() {
        assert_eq!(House::new(0, Figure::PUER).strength(), 1);
        assert_eq!(House::new(6, Figure::PUER).strength(), -1);
        assert_eq!(House::new(3, Figure::PUER).strength(), 0);
    }

    #[test]
    fn test_serializes_with_strength() {
        let json = serde_json::to_value(House::new(0, Figure::PUER).marked(true, false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "index": 0,
                "figure": "Puer",
                "querent": true,
                "quesited": false,
                "strength": 1,
            })
        );
    }

    #[test]
    fn test_company_type() {
        let populus = House::new(0, Figure::POPULUS);
        let via = House::new(1, Figure::VIA);
        assert_eq!(populus.company_type(&via), Some(CompanyType::DemiSimple));
    }
}
