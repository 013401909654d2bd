use super::Engine;

use async_trait::async_trait;

use crate::{
    api::FareAPI,
    entities::{FareQuote, FareRequest, RideTier, RideTierInfo, TimeOfDay},
    error::Error,
};

#[async_trait]
impl FareAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn estimate_fare(
        &self,
        distance_km: f64,
        ride_tier: &str,
        time_of_day: TimeOfDay,
    ) -> Result<FareQuote, Error> {
        let ride_tier = self.resolve_tier(ride_tier)?;
        let request = FareRequest::new(distance_km, ride_tier, time_of_day)?;

        let quote = self.schedule.quote(&request)?;

        tracing::debug!("quoted total fare {:.2}", quote.total_fare);

        Ok(quote)
    }

    #[tracing::instrument(skip(self))]
    async fn ride_tiers(&self) -> Result<Vec<RideTierInfo>, Error> {
        Ok(RideTier::ALL.iter().map(|tier| tier.info()).collect())
    }
}
