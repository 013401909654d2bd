pub mod bookings;
pub mod fares;
pub mod health;
pub mod ride_tiers;
