use serde::{Deserialize, Serialize};

use crate::entities::{RideTier, TimeOfDay};
use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareRequest {
    pub distance_km: f64,
    pub ride_tier: RideTier,
    pub time_of_day: TimeOfDay,
}

impl FareRequest {
    /// Fails unless `distance_km` is positive and finite.
    pub fn new(distance_km: f64, ride_tier: RideTier, time_of_day: TimeOfDay) -> Result<Self, Error> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(invalid_input_error());
        }

        Ok(Self {
            distance_km,
            ride_tier,
            time_of_day,
        })
    }
}

/// Fare breakdown. Currency amounts are rounded to cents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub ride_tier: RideTier,
    pub tier_multiplier: f64,
    pub surge_multiplier: f64,
    pub base_fare: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surge_amount: Option<f64>,
    pub total_fare: f64,
}
