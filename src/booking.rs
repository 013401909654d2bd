//! Booking page estimate: flat price with demand jitter and a pickup ETA.
//!
//! This is independent of [`crate::pricing`]; the two formulas are not
//! reconciled. All randomness comes from the caller's generator.

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use uuid::Builder;

use crate::entities::{BookingEstimate, BookingRequest};
use crate::pricing::round_currency;

/// Flat price before the tier multiplier and jitter.
pub const BOOKING_BASE_PRICE: f64 = 4.50;

/// Upper bound (exclusive) of the demand uplift fraction.
pub const MAX_DEMAND_JITTER: f64 = 0.3;

pub const MIN_ETA_MINUTES: u32 = 10;
pub const MAX_ETA_MINUTES: u32 = 25;

pub fn estimate_booking<R: Rng + ?Sized>(rng: &mut R, request: &BookingRequest) -> BookingEstimate {
    let jitter = Uniform::new(0.0, MAX_DEMAND_JITTER).sample(rng);
    let eta_minutes = Uniform::new(MIN_ETA_MINUTES, MAX_ETA_MINUTES).sample(rng);
    let token = Builder::from_random_bytes(rng.gen()).into_uuid();

    let fare = BOOKING_BASE_PRICE * request.ride_tier.multiplier() * (1.0 + jitter);

    BookingEstimate {
        token,
        pickup: request.pickup.clone(),
        dropoff: request.dropoff.clone(),
        ride_tier: request.ride_tier,
        capacity: request.ride_tier.capacity(),
        fare: round_currency(fare),
        eta_minutes,
    }
}
