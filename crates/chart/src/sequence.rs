use crate::error::{ChartError, Result};
use geomancy_figures::{Elements, Figure};

/// Number of slots in a shield: 4 mothers, 4 daughters, 4 nieces, 2 witnesses, 1 judge
pub const SHIELD_SLOTS: usize = 15;

/// Number of externally settable slots
pub const MOTHERS: usize = 4;

/// The fifteen-slot projection of four seed figures.
///
/// Only the mothers are stored. Every derived slot is recomputed on read, so
/// setting a mother can never leave a stale daughter, niece, witness or judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartSequence {
    mothers: [Figure; MOTHERS],
}

impl ChartSequence {
    /// A sequence with Populus in every mother
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn from_figures(mothers: [Figure; MOTHERS]) -> Self {
        Self { mothers }
    }

    /// Seed mothers from figure names, in order; missing names stay Populus
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut seq = Self::new();
        for (ix, name) in names.iter().enumerate() {
            seq.set_named(ix, name.as_ref())?;
        }
        Ok(seq)
    }

    /// Replace mother `ix`
    pub fn set(&mut self, ix: usize, figure: Figure) -> Result<()> {
        let slot = self
            .mothers
            .get_mut(ix)
            .ok_or(ChartError::InvalidAssignment(ix))?;
        *slot = figure;
        Ok(())
    }

    /// Replace mother `ix` with the figure called `name`
    pub fn set_named(&mut self, ix: usize, name: &str) -> Result<()> {
        if ix >= MOTHERS {
            return Err(ChartError::InvalidAssignment(ix));
        }
        self.set(ix, Figure::by_name(name)?)
    }

    pub const fn mothers(&self) -> [Figure; MOTHERS] {
        self.mothers
    }

    /// Figure in slot `ix` (0-14)
    pub fn get(&self, ix: usize) -> Result<Figure> {
        match ix {
            0..=3 => Ok(self.mothers[ix]),
            4..=7 => self.daughter(ix - 4),
            8..=14 => {
                let left = self.get((ix - 8) * 2)?;
                let right = self.get((ix - 8) * 2 + 1)?;
                Ok(left + right)
            }
            _ => Err(ChartError::InvalidIndex(ix)),
        }
    }

    /// Daughter `line` (0-3): the mothers read across instead of down.
    ///
    /// Line `i` of every mother becomes the fire, air, water and earth line
    /// of the daughter in turn.
    pub fn daughter(&self, line: usize) -> Result<Figure> {
        let [first, second, third, fourth] = self.mothers;
        Ok(Figure::by_elements(Elements {
            fire: first.line(line)?,
            air: second.line(line)?,
            water: third.line(line)?,
            earth: fourth.line(line)?,
        }))
    }

    /// All fifteen slots in projection order
    pub fn slots(&self) -> [Figure; SHIELD_SLOTS] {
        let mut slots = [Figure::POPULUS; SHIELD_SLOTS];
        slots[..MOTHERS].copy_from_slice(&self.mothers);
        for line in 0..MOTHERS {
            let [fire, air, water, earth] = self.mothers.map(|m| (m.flags() >> line) & 1 == 1);
            slots[MOTHERS + line] = Figure::by_elements(Elements {
                fire,
                air,
                water,
                earth,
            });
        }
        for ix in 8..SHIELD_SLOTS {
            slots[ix] = slots[(ix - 8) * 2] + slots[(ix - 8) * 2 + 1];
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(seq: &ChartSequence, range: std::ops::Range<usize>) -> Vec<&'static str> {
        range.map(|ix| seq.get(ix).unwrap().name()).collect()
    }

    #[test]
    fn test_starts_with_populus() {
        let seq = ChartSequence::new();
        for ix in 0..SHIELD_SLOTS {
            assert_eq!(seq.get(ix).unwrap(), Figure::POPULUS);
        }
    }

    #[test]
    fn test_projects_daughters() {
        let mut seq = ChartSequence::new();
        seq.set(0, Figure::AMISSO).unwrap();
        seq.set(1, Figure::LAETITIA).unwrap();
        seq.set(2, Figure::AMISSO).unwrap();
        seq.set(3, Figure::VIA).unwrap();

        assert_eq!(
            names(&seq, 4..8),
            vec!["Via", "Tristitia", "Puella", "Tristitia"]
        );
        assert_eq!(seq.daughter(0).unwrap(), Figure::VIA);
        assert_eq!(seq.daughter(2).unwrap(), Figure::PUELLA);
        assert!(matches!(seq.daughter(4), Err(ChartError::Figure(_))));
    }

    #[test]
    fn test_projects_nieces_witnesses_and_judge() {
        let seq = ChartSequence::from_names(&["amisso", "conjunctio", "laetitia", "populus"]).unwrap();
        assert_eq!(
            names(&seq, 8..15),
            vec![
                "Fortuna Minor",
                "Laetitia",
                "Cauda Draconis",
                "Fortuna Minor",
                "Rubeus",
                "Albus",
                "Conjunctio",
            ]
        );
    }

    #[test]
    fn test_slots_match_get() {
        let seq = ChartSequence::from_names(&["puer", "carcer", "via", "albus"]).unwrap();
        let slots = seq.slots();
        for (ix, figure) in slots.iter().enumerate() {
            assert_eq!(*figure, seq.get(ix).unwrap());
        }
    }

    #[test]
    fn test_mutating_a_mother_reprojects() {
        let mut seq = ChartSequence::new();
        assert_eq!(seq.get(14).unwrap(), Figure::POPULUS);
        seq.set(0, Figure::LAETITIA).unwrap();
        assert_eq!(seq.get(4).unwrap(), Figure::LAETITIA);
        assert_eq!(seq.get(8).unwrap(), Figure::LAETITIA);
        assert_eq!(seq.get(12).unwrap(), Figure::LAETITIA);
        // the judge always has an even number of points
        assert_eq!(seq.get(14).unwrap(), Figure::POPULUS);
    }

    #[test]
    fn test_only_mothers_are_settable() {
        let mut seq = ChartSequence::new();
        assert!(matches!(
            seq.set(4, Figure::VIA),
            Err(ChartError::InvalidAssignment(4))
        ));
        assert!(matches!(
            seq.set_named(9, "via"),
            Err(ChartError::InvalidAssignment(9))
        ));
        assert_eq!(seq, ChartSequence::new());
    }

    #[test]
    fn test_get_out_of_range() {
        let seq = ChartSequence::new();
        assert!(matches!(seq.get(15), Err(ChartError::InvalidIndex(15))));
    }

    #[test]
    fn test_unknown_name() {
        let err = ChartSequence::from_names(&["via", "nope"]).unwrap_err();
        assert!(matches!(err, ChartError::Figure(_)));
    }
}
