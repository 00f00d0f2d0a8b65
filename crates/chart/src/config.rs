use crate::error::{ChartError, Result};
use crate::indications::IndicationKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Signed weight of every indication kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicationWeights {
    pub occupation: i32,
    pub conjunction: i32,
    /// Springs only locate figures; they do not perfect on their own
    pub spring: i32,
    pub mutation: i32,
    pub translation: i32,
    pub trine: i32,
    pub sextile: i32,
    pub square: i32,
    pub opposition: i32,

    /// Added to every non-zero weight found through a company substitution
    pub company_penalty: i32,

    /// Weight of the synthetic impedition
    pub impedition: i32,
}

impl Default for IndicationWeights {
    fn default() -> Self {
        Self {
            occupation: 5,
            conjunction: 5,
            spring: 0,
            mutation: 4,
            translation: 4,
            trine: 3,
            sextile: 3,
            square: -3,
            opposition: -4,
            company_penalty: -1,
            impedition: -5,
        }
    }
}

impl IndicationWeights {
    /// Base weight of `kind`
    pub const fn base(&self, kind: IndicationKind) -> i32 {
        match kind {
            IndicationKind::Occupation => self.occupation,
            IndicationKind::Conjunction => self.conjunction,
            IndicationKind::Spring => self.spring,
            IndicationKind::Mutation => self.mutation,
            IndicationKind::Translation => self.translation,
            IndicationKind::Trine => self.trine,
            IndicationKind::Square => self.square,
            IndicationKind::Sextile => self.sextile,
            IndicationKind::Opposition => self.opposition,
            IndicationKind::Impedition => self.impedition,
        }
    }

    /// Weight of `kind`, penalized when found through company
    pub const fn weigh(&self, kind: IndicationKind, in_company: bool) -> i32 {
        let base = self.base(kind);
        if in_company && base != 0 {
            base + self.company_penalty
        } else {
            base
        }
    }
}

/// When a chart is declared impeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpeditionPolicy {
    /// The summed weight of all indications is zero or less
    #[default]
    NetSum,

    /// No single indication carries a positive weight
    NoPositive,
}

impl ImpeditionPolicy {
    pub fn is_impeded(self, weights: impl IntoIterator<Item = i32>) -> bool {
        match self {
            ImpeditionPolicy::NetSum => weights.into_iter().sum::<i32>() <= 0,
            ImpeditionPolicy::NoPositive => weights.into_iter().all(|w| w <= 0),
        }
    }
}

/// Configuration for the perfection engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicationConfig {
    pub weights: IndicationWeights,
    pub impedition: ImpeditionPolicy,
}

impl IndicationConfig {
    /// Parse and validate a TOML document; missing keys keep their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| ChartError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded indication config from {}", path.as_ref().display());
        Self::from_toml_str(&raw)
    }

    /// Perfections must stay positive, denials and penalties must not be
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        let perfections = [
            ("occupation", w.occupation),
            ("conjunction", w.conjunction),
            ("mutation", w.mutation),
            ("translation", w.translation),
            ("trine", w.trine),
            ("sextile", w.sextile),
        ];
        for (name, weight) in perfections {
            if weight <= 0 {
                return Err(ChartError::config(format!(
                    "{name} weight must be > 0 (got {weight})"
                )));
            }
        }

        let denials = [
            ("square", w.square),
            ("opposition", w.opposition),
            ("company_penalty", w.company_penalty),
            ("impedition", w.impedition),
        ];
        for (name, weight) in denials {
            if weight > 0 {
                return Err(ChartError::config(format!(
                    "{name} weight must be <= 0 (got {weight})"
                )));
            }
        }

        if w.spring < 0 {
            return Err(ChartError::config(format!(
                "spring weight must be >= 0 (got {})",
                w.spring
            )));
        }

        Ok(())
    }
}
