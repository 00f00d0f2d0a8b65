use clap::ValueEnum;
use geomancy_chart::{HouseSystem, ImpeditionPolicy};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum HouseSystemFlag {
    Ordinary,
    Astrological,
}

impl HouseSystemFlag {
    pub(crate) const fn as_domain(self) -> HouseSystem {
        match self {
            HouseSystemFlag::Ordinary => HouseSystem::Ordinary,
            HouseSystemFlag::Astrological => HouseSystem::Astrological,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum ImpeditionFlag {
    /// Impeded when the summed weight is zero or less
    NetSum,
    /// Impeded when no indication is positive
    NoPositive,
}

impl ImpeditionFlag {
    pub(crate) const fn as_domain(self) -> ImpeditionPolicy {
        match self {
            ImpeditionFlag::NetSum => ImpeditionPolicy::NetSum,
            ImpeditionFlag::NoPositive => ImpeditionPolicy::NoPositive,
        }
    }
}
