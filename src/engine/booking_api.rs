use super::Engine;

use async_trait::async_trait;

use crate::{
    api::BookingAPI,
    booking,
    entities::{BookingEstimate, BookingRequest},
    error::Error,
};

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn estimate_booking(
        &self,
        pickup: &str,
        dropoff: &str,
        ride_tier: &str,
    ) -> Result<BookingEstimate, Error> {
        let ride_tier = self.resolve_tier(ride_tier)?;
        let request = BookingRequest::new(pickup, dropoff, ride_tier)?;

        let mut rng = self.booking_rng.lock().await;
        let estimate = booking::estimate_booking(&mut *rng, &request);

        tracing::info!(
            "booking estimate {} fare {:.2} eta {}min",
            estimate.token,
            estimate.fare,
            estimate.eta_minutes
        );

        Ok(estimate)
    }
}
