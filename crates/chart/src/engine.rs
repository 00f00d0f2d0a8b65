//! Perfection engine: every relationship between a querent and a quesited.

use crate::config::IndicationConfig;
use crate::house::{House, HOUSES};
use crate::indications::{Aspect, AspectHit, Direction, Hit, IndicationKind, Indications};
use std::iter;

/// Aspects in the order they are tested; the first match wins
const ASPECT_ORDER: [Aspect; 4] = [
    Aspect::Trine,
    Aspect::Square,
    Aspect::Sextile,
    Aspect::Opposition,
];

/// Finds indications over one fixed set of twelve houses.
pub(crate) struct PerfectionEngine<'a> {
    houses: &'a [House; HOUSES],
    config: &'a IndicationConfig,
}

impl<'a> PerfectionEngine<'a> {
    pub(crate) fn new(houses: &'a [House; HOUSES], config: &'a IndicationConfig) -> Self {
        Self { houses, config }
    }

    /// Full report for `querent`/`quesited`: direct indications, those found
    /// through company, and impedition when nothing perfects.
    pub(crate) fn indications(&self, querent: usize, quesited: usize) -> Indications {
        let mut report = self.collect(querent, quesited, false);

        for (q, qs) in self.substitutions(querent, quesited) {
            log::debug!("Company substitution {querent}/{quesited} -> {q}/{qs}");
            report.merge(self.collect(q, qs, true));
        }

        if self.config.impedition.is_impeded(report.weights()) {
            log::debug!("Impedition between {querent} and {quesited}");
            report.impedition.push(Hit::new(
                querent,
                quesited,
                self.weigh(IndicationKind::Impedition, false),
            ));
        }

        report
    }

    /// Companion house of `position` when its figure keeps company with ours
    pub(crate) fn company_of(&self, position: usize) -> Option<usize> {
        let house = &self.houses[position];
        let companion = house.companion();
        house
            .company_type(&self.houses[companion])
            .map(|kind| {
                log::trace!("House {position} keeps {kind} company with {companion}");
                companion
            })
    }

    /// Querent/quesited pairs to investigate in company. Only one level deep.
    ///
    /// Pairs that collapse onto one house, or that are the direct pair with
    /// roles swapped, are skipped.
    fn substitutions(&self, querent: usize, quesited: usize) -> Vec<(usize, usize)> {
        let company_q = self.company_of(querent);
        let company_qs = self.company_of(quesited);

        let mut pairs = Vec::new();
        if let Some(q) = company_q {
            pairs.push((q, quesited));
        }
        if let Some(qs) = company_qs {
            pairs.push((querent, qs));
        }
        if let (Some(q), Some(qs)) = (company_q, company_qs) {
            pairs.push((q, qs));
        }
        pairs.retain(|&(q, qs)| q != qs && (q, qs) != (quesited, querent));
        pairs
    }

    fn weigh(&self, kind: IndicationKind, in_company: bool) -> i32 {
        self.config.weights.weigh(kind, in_company)
    }

    fn marked(&self, querent: usize, quesited: usize) -> [House; HOUSES] {
        self.houses
            .map(|house| house.marked(house.index == querent, house.index == quesited))
    }

    /// Indications between exactly `querent` and `quesited`, no company
    fn collect(&self, querent: usize, quesited: usize, in_company: bool) -> Indications {
        let houses = self.marked(querent, quesited);
        let q = houses[querent];
        let qs = houses[quesited];
        let weigh = |kind| self.weigh(kind, in_company);
        let mut report = Indications::default();

        if q.has_figure(qs.figure) {
            report
                .occupation
                .push(Hit::new(querent, quesited, weigh(IndicationKind::Occupation)));
        }

        let mut querent_springs = Vec::new();
        let mut quesited_springs = Vec::new();
        for house in houses.iter().filter(|h| !h.querent && !h.quesited) {
            if house.is_next_to(querent) && house.has_figure(qs.figure) {
                report.conjunction.querent.push(Hit::new(
                    querent,
                    house.index,
                    weigh(IndicationKind::Conjunction),
                ));
            }
            if house.is_next_to(quesited) && house.has_figure(q.figure) {
                report.conjunction.quesited.push(Hit::new(
                    house.index,
                    quesited,
                    weigh(IndicationKind::Conjunction),
                ));
            }
            if house.has_figure(q.figure) {
                querent_springs.push(house.index);
                report
                    .springs
                    .querent
                    .push(Hit::new(querent, house.index, weigh(IndicationKind::Spring)));
            }
            if house.has_figure(qs.figure) {
                quesited_springs.push(house.index);
                report
                    .springs
                    .quesited
                    .push(Hit::new(house.index, quesited, weigh(IndicationKind::Spring)));
            }
        }

        for &from in &querent_springs {
            for &to in &quesited_springs {
                if houses[from].is_next_to(to) {
                    report
                        .mutation
                        .push(Hit::new(from, to, weigh(IndicationKind::Mutation)));
                }
            }
        }

        self.translations(&houses, &q, &qs, in_company, &mut report);

        let querent_side: Vec<usize> = iter::once(querent).chain(querent_springs).collect();
        let quesited_side: Vec<usize> = iter::once(quesited).chain(quesited_springs).collect();
        for &from in &querent_side {
            for &to in &quesited_side {
                if from == to {
                    continue;
                }
                if let Some((aspect, direction)) = aspect_between(&houses[from], to) {
                    report.push_aspect(
                        aspect,
                        AspectHit {
                            direction,
                            querent: from,
                            quesited: to,
                            weight: weigh(aspect.kind()),
                        },
                    );
                }
            }
        }

        log::trace!(
            "Collected {}/{} (company: {in_company}): weight {}",
            querent,
            quesited,
            report.weight()
        );
        report
    }

    /// A figure carried between the two by a neighbor of each.
    ///
    /// Neighbors shared by both sides, and neighbors that are or carry the
    /// querent or quesited figure, cannot translate.
    fn translations(
        &self,
        houses: &[House; HOUSES],
        q: &House,
        qs: &House,
        in_company: bool,
        report: &mut Indications,
    ) {
        let querent_neighbors = q.neighbors();
        let quesited_neighbors = qs.neighbors();

        let eligible = |position: usize, other_side: &[usize; 2]| {
            let house = &houses[position];
            !other_side.contains(&position)
                && position != q.index
                && position != qs.index
                && !house.has_figure(q.figure)
                && !house.has_figure(qs.figure)
        };

        for &from in querent_neighbors
            .iter()
            .filter(|p| eligible(**p, &quesited_neighbors))
        {
            for &to in quesited_neighbors
                .iter()
                .filter(|p| eligible(**p, &querent_neighbors))
            {
                if houses[from].has_figure(houses[to].figure) {
                    report.translation.push(Hit::new(
                        from,
                        to,
                        self.weigh(IndicationKind::Translation, in_company),
                    ));
                }
            }
        }
    }
}

/// Aspect from `from` to position `to`, tested trine, square, sextile, opposition
fn aspect_between(from: &House, to: usize) -> Option<(Aspect, Direction)> {
    let aspect = ASPECT_ORDER.into_iter().find(|aspect| match aspect {
        Aspect::Trine => from.is_trine_to(to),
        Aspect::Square => from.is_square_to(to),
        Aspect::Sextile => from.is_sextile_to(to),
        Aspect::Opposition => from.is_opposed_to(to),
    })?;

    let direction = if from.is_sinister_of(to) {
        Direction::Sinister
    } else if from.is_dexter_of(to) {
        Direction::Dexter
    } else {
        Direction::None
    };

    Some((aspect, direction))
}
