use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::RideTier;
use crate::error::{invalid_input_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub pickup: String,
    pub dropoff: String,
    #[serde(default)]
    pub ride_tier: RideTier,
}

impl BookingRequest {
    /// Both locations must be non-blank; surrounding whitespace is dropped.
    pub fn new(pickup: &str, dropoff: &str, ride_tier: RideTier) -> Result<Self, Error> {
        let pickup = pickup.trim();
        let dropoff = dropoff.trim();

        if pickup.is_empty() || dropoff.is_empty() {
            return Err(invalid_input_error());
        }

        Ok(Self {
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            ride_tier,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingEstimate {
    pub token: Uuid,
    pub pickup: String,
    pub dropoff: String,
    pub ride_tier: RideTier,
    pub capacity: u32,
    pub fare: f64,
    pub eta_minutes: u32,
}
