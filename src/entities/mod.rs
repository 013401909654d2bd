mod booking;
mod fare;
mod ride_tier;
mod time_of_day;

pub use booking::{BookingEstimate, BookingRequest};
pub use fare::{FareQuote, FareRequest};
pub use ride_tier::{RideTier, RideTierInfo};
pub use time_of_day::TimeOfDay;
