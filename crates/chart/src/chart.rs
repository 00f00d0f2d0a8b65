use crate::config::IndicationConfig;
use crate::engine::PerfectionEngine;
use crate::error::{ChartError, Result};
use crate::house::{House, HOUSES};
use crate::indications::Indications;
use crate::sequence::{ChartSequence, MOTHERS, SHIELD_SLOTS};
use crate::system::HouseSystem;
use geomancy_figures::{slugify, CompanyType, Figure};
use serde::Serialize;

pub const DEFAULT_QUERENT: usize = 0;
pub const DEFAULT_QUESITED: usize = 4;

/// Position of the judge in the shield
pub const JUDGE: usize = 14;

/// Shield slot names in projection order
pub const SHIELD_NAMES: [&str; SHIELD_SLOTS] = [
    "Mother 1",
    "Mother 2",
    "Mother 3",
    "Mother 4",
    "Daughter 1",
    "Daughter 2",
    "Daughter 3",
    "Daughter 4",
    "Niece 1",
    "Niece 2",
    "Niece 3",
    "Niece 4",
    "Left Witness",
    "Right Witness",
    "Judge",
];

/// A named slot of the shield chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShieldSlot {
    pub name: &'static str,
    pub figure: Figure,
}

/// Company kept by a house with its companion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Company {
    pub house: House,
    pub kind: CompanyType,
}

/// Position of a shield slot name ("Judge", "niece-2", ...)
pub fn shield_position(name: &str) -> Result<usize> {
    let wanted = slugify(name);
    SHIELD_NAMES
        .iter()
        .position(|slot| slugify(slot) == wanted)
        .ok_or_else(|| ChartError::SlotNotFound(name.to_string()))
}

/// A geomantic chart: the projected sequence, the house system used to read
/// it, and the two houses the question is about.
///
/// Cloning a chart yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    sequence: ChartSequence,
    house_system: HouseSystem,
    querent: Option<usize>,
    quesited: Option<usize>,
    config: IndicationConfig,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(ChartSequence::new())
    }
}

impl Chart {
    pub fn new(sequence: ChartSequence) -> Self {
        Self {
            sequence,
            house_system: HouseSystem::default(),
            querent: Some(DEFAULT_QUERENT),
            quesited: Some(DEFAULT_QUESITED),
            config: IndicationConfig::default(),
        }
    }

    pub fn from_figures(mothers: [Figure; MOTHERS]) -> Self {
        Self::new(ChartSequence::from_figures(mothers))
    }

    /// Chart seeded from up to four figure names
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        Ok(Self::new(ChartSequence::from_names(names)?))
    }

    /// Builder: querent and quesited positions
    pub fn with_positions(mut self, querent: usize, quesited: usize) -> Result<Self> {
        self.set_querent(Some(querent))?;
        self.set_quesited(Some(quesited))?;
        Ok(self)
    }

    /// Builder: house system
    #[must_use]
    pub fn with_house_system(mut self, house_system: HouseSystem) -> Self {
        self.house_system = house_system;
        self
    }

    /// Builder: engine configuration
    #[must_use]
    pub fn with_config(mut self, config: IndicationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn sequence(&self) -> &ChartSequence {
        &self.sequence
    }

    pub fn house_system(&self) -> HouseSystem {
        self.house_system
    }

    pub fn config(&self) -> &IndicationConfig {
        &self.config
    }

    pub fn querent(&self) -> Option<usize> {
        self.querent
    }

    pub fn quesited(&self) -> Option<usize> {
        self.quesited
    }

    /// The four mothers this chart was seeded with
    pub fn seeds(&self) -> [Figure; MOTHERS] {
        self.sequence.mothers()
    }

    pub fn set_mother(&mut self, ix: usize, figure: Figure) -> Result<()> {
        self.sequence.set(ix, figure)
    }

    pub fn set_querent(&mut self, position: Option<usize>) -> Result<()> {
        self.querent = check_position(position)?;
        Ok(())
    }

    pub fn set_quesited(&mut self, position: Option<usize>) -> Result<()> {
        self.quesited = check_position(position)?;
        Ok(())
    }

    /// Switch house system by name
    pub fn set_house_type(&mut self, name: &str) -> Result<()> {
        self.house_system = HouseSystem::by_name(name)?;
        log::debug!("House system set to {}", self.house_system);
        Ok(())
    }

    /// House at `position` (0-11, or 12-14 for witnesses and judge)
    pub fn house(&self, position: usize) -> Result<House> {
        let slot = self.house_system.slot_for(position)?;
        let figure = self.sequence.get(slot)?;
        Ok(House::new(position, figure).marked(
            self.querent == Some(position),
            self.quesited == Some(position),
        ))
    }

    /// House backing the shield slot called `name`
    pub fn house_named(&self, name: &str) -> Result<House> {
        self.house(shield_position(name)?)
    }

    /// The twelve houses in position order
    pub fn houses(&self) -> Result<[House; HOUSES]> {
        let mut houses = [House::new(0, Figure::POPULUS); HOUSES];
        for (position, house) in houses.iter_mut().enumerate() {
            *house = self.house(position)?;
        }
        Ok(houses)
    }

    /// All fifteen shield slots with their names
    pub fn shield(&self) -> Vec<ShieldSlot> {
        SHIELD_NAMES
            .iter()
            .zip(self.sequence.slots())
            .map(|(&name, figure)| ShieldSlot { name, figure })
            .collect()
    }

    /// Figure in the shield slot called `name`
    pub fn shield_slot(&self, name: &str) -> Result<Figure> {
        self.sequence.get(shield_position(name)?)
    }

    /// The house found by counting the active points of all twelve houses
    pub fn index(&self) -> Result<House> {
        self.count_round(Figure::active_points)
    }

    /// The house found by counting all points of all twelve houses
    pub fn part_of_fortune(&self) -> Result<House> {
        self.count_round(Figure::points)
    }

    fn count_round(&self, points: fn(Figure) -> u32) -> Result<House> {
        let total: u32 = self
            .houses()?
            .iter()
            .map(|house| points(house.figure))
            .sum();
        self.house(total as usize % HOUSES)
    }

    /// Follow the judge back through every parent sharing its fire line.
    ///
    /// The walk runs over the shield itself; each slot where it ends is
    /// returned as the house that displays it under the active house system.
    /// More than one house when the way branches.
    pub fn way_of_the_point(&self) -> Result<Vec<House>> {
        let slots = self.sequence.slots();
        let mut ends = Vec::new();
        walk_point(&slots, JUDGE, &mut ends);
        ends.into_iter()
            .map(|slot| self.house(self.house_system.position_for(slot)?))
            .collect()
    }

    /// Company kept by `house` with its companion, if any
    pub fn company(&self, house: &House) -> Result<Option<Company>> {
        let companion = self.house(house.companion())?;
        Ok(house
            .company_type(&companion)
            .map(|kind| Company {
                house: companion,
                kind,
            }))
    }

    /// Indications for the chart's own querent and quesited
    pub fn indications(&self) -> Result<Indications> {
        self.indications_for(self.querent, self.quesited)
    }

    /// Indications between two positions; empty when either is unset
    pub fn indications_for(
        &self,
        querent: Option<usize>,
        quesited: Option<usize>,
    ) -> Result<Indications> {
        let (Some(querent), Some(quesited)) = (check_position(querent)?, check_position(quesited)?)
        else {
            return Ok(Indications::default());
        };

        let houses = self.houses()?;
        let report = PerfectionEngine::new(&houses, &self.config).indications(querent, quesited);
        log::debug!(
            "Indications {querent}/{quesited} under {} houses: weight {}",
            self.house_system,
            report.weight()
        );
        Ok(report)
    }

    /// Summed weight of the chart's indications
    pub fn indication_weight(&self) -> Result<i32> {
        Ok(self.indications()?.weight())
    }
}

/// Slots below 8 end the way; higher slots hand it to parents of equal fire
fn walk_point(slots: &[Figure; SHIELD_SLOTS], slot: usize, ends: &mut Vec<usize>) {
    if slot < 8 {
        ends.push(slot);
        return;
    }
    let first = (slot - 8) * 2;
    for parent in [first, first + 1] {
        if slots[parent].fire() == slots[slot].fire() {
            walk_point(slots, parent, ends);
        }
    }
}

fn check_position(position: Option<usize>) -> Result<Option<usize>> {
    match position {
        Some(p) if p >= HOUSES => Err(ChartError::InvalidIndex(p)),
        other => Ok(other),
    }
}
