//! # Geomancy Chart
//!
//! Projects four seed figures into a full shield, reads it as twelve houses
//! and judges the question between a querent and a quesited house.
//!
//! ## Architecture
//!
//! ```text
//! [Figure; 4] (mothers)
//!     │
//!     ├──> ChartSequence (15 slots, recomputed on read)
//!     │      ├─ Daughters: mothers transposed
//!     │      ├─ Nieces: pairwise sums
//!     │      └─ Witnesses, Judge
//!     │
//!     ├──> HouseSystem (house position → shield slot)
//!     │
//!     ├──> Chart (facade)
//!     │      ├─ Houses, shield, index, part of fortune
//!     │      ├─ Way of the point
//!     │      └─ Company
//!     │
//!     └──> PerfectionEngine
//!            ├─ Occupation, conjunction, springs
//!            ├─ Mutation, translation, aspects
//!            ├─ Company substitutions (one level)
//!            └─ Impedition → weighted Indications
//! ```
//!
//! ## Example
//!
//! ```rust
//! use geomancy_chart::Chart;
//!
//! let chart = Chart::from_names(&["via", "populus", "conjunctio", "populus"])
//!     .unwrap()
//!     .with_positions(0, 8)
//!     .unwrap();
//!
//! let report = chart.indications().unwrap();
//! assert_eq!(report.occupation.len(), 1);
//! assert!(report.weight() > 0);
//! ```

mod chart;
mod config;
mod engine;
mod error;
mod house;
mod indications;
mod sequence;
mod system;

pub use chart::{
    shield_position, Chart, Company, ShieldSlot, DEFAULT_QUERENT, DEFAULT_QUESITED, JUDGE,
    SHIELD_NAMES,
};
pub use config::{ImpeditionPolicy, IndicationConfig, IndicationWeights};
pub use error::{ChartError, Result};
pub use house::{house_range, House, HOUSES};
pub use indications::{
    add_unique, Aspect, AspectHit, Direction, Hit, IndicationKind, Indications, Sided,
};
pub use sequence::{ChartSequence, MOTHERS, SHIELD_SLOTS};
pub use system::HouseSystem;

pub use geomancy_figures::{CompanyType, Figure};
