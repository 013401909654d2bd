use async_trait::async_trait;

use crate::entities::{BookingEstimate, FareQuote, RideTierInfo, TimeOfDay};
use crate::error::Error;

#[async_trait]
pub trait FareAPI {
    /// Quote a fare for a tier given by name; unknown names follow the configured policy.
    async fn estimate_fare(
        &self,
        distance_km: f64,
        ride_tier: &str,
        time_of_day: TimeOfDay,
    ) -> Result<FareQuote, Error>;

    async fn ride_tiers(&self) -> Result<Vec<RideTierInfo>, Error>;
}

#[async_trait]
pub trait BookingAPI {
    async fn estimate_booking(
        &self,
        pickup: &str,
        dropoff: &str,
        ride_tier: &str,
    ) -> Result<BookingEstimate, Error>;
}

pub trait API: FareAPI + BookingAPI {}
