use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

/// Service class selected for a ride.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideTier {
    Economy,
    Comfort,
    Premium,
}

/// Catalog entry describing a tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RideTierInfo {
    pub tier: RideTier,
    pub name: String,
    pub description: String,
    pub multiplier: f64,
    pub capacity: u32,
}

impl RideTier {
    /// Every tier in display order.
    pub const ALL: [RideTier; 3] = [RideTier::Economy, RideTier::Comfort, RideTier::Premium];

    pub fn name(&self) -> String {
        match self {
            Self::Economy => "economy".into(),
            Self::Comfort => "comfort".into(),
            Self::Premium => "premium".into(),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::Economy => "Economy".into(),
            Self::Comfort => "Comfort".into(),
            Self::Premium => "Premium".into(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::Economy => "Affordable rides".into(),
            Self::Comfort => "Premium comfort".into(),
            Self::Premium => "Luxury experience".into(),
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Economy => 1.0,
            Self::Comfort => 1.5,
            Self::Premium => 2.0,
        }
    }

    pub fn capacity(&self) -> u32 {
        4
    }

    /// Case-insensitive lookup by tier name, `None` for anything outside the catalog.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|tier| tier.name().eq_ignore_ascii_case(name))
    }

    pub fn info(&self) -> RideTierInfo {
        RideTierInfo {
            tier: *self,
            name: self.display_name(),
            description: self.description(),
            multiplier: self.multiplier(),
            capacity: self.capacity(),
        }
    }
}

impl Default for RideTier {
    fn default() -> Self {
        Self::Economy
    }
}

impl fmt::Display for RideTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for RideTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(invalid_input_error)
    }
}
