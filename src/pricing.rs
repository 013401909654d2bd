//! Distance-based fare estimation.

use serde::{Deserialize, Serialize};

use crate::entities::{FareQuote, FareRequest, RideTier, TimeOfDay};
use crate::error::{invalid_input_error, Error};

/// Per-kilometer rate in currency units.
pub const BASE_RATE_PER_KM: f64 = 2.50;

/// No quote falls below this amount.
pub const MINIMUM_FARE: f64 = 4.50;

/// Surge multiplier applied during peak hours.
pub const PEAK_SURGE_MULTIPLIER: f64 = 1.5;

/// Rates a quote is computed from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareSchedule {
    pub base_rate_per_km: f64,
    pub minimum_fare: f64,
    pub peak_surge_multiplier: f64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_rate_per_km: BASE_RATE_PER_KM,
            minimum_fare: MINIMUM_FARE,
            peak_surge_multiplier: PEAK_SURGE_MULTIPLIER,
        }
    }
}

impl FareSchedule {
    pub fn surge_multiplier(&self, time_of_day: TimeOfDay) -> f64 {
        if time_of_day.is_peak() {
            self.peak_surge_multiplier
        } else {
            1.0
        }
    }

    /// Quote a validated request.
    ///
    /// `base = max(distance * rate * tier multiplier, minimum)`, surge is
    /// `base * (surge multiplier - 1)` and only reported when it is non-zero
    /// after rounding. The total is rounded from the unrounded parts.
    ///
    /// Fails with an invalid input error when the fare overflows.
    pub fn quote(&self, request: &FareRequest) -> Result<FareQuote, Error> {
        let tier_multiplier = request.ride_tier.multiplier();
        let surge_multiplier = self.surge_multiplier(request.time_of_day);

        let base_fare = (request.distance_km * self.base_rate_per_km * tier_multiplier)
            .max(self.minimum_fare);
        let surge_fare = base_fare * (surge_multiplier - 1.0);

        let surge_amount = Some(round_currency(surge_fare)).filter(|amount| *amount > 0.0);
        let total_fare = match surge_amount {
            Some(_) => base_fare + surge_fare,
            None => base_fare,
        };

        if !total_fare.is_finite() {
            return Err(invalid_input_error());
        }

        Ok(FareQuote {
            ride_tier: request.ride_tier,
            tier_multiplier,
            surge_multiplier,
            base_fare: round_currency(base_fare),
            surge_amount,
            total_fare: round_currency(total_fare),
        })
    }
}

/// Estimate a fare with the default schedule.
///
/// Fails with an invalid input error unless `distance_km` is positive and finite.
pub fn estimate(distance_km: f64, ride_tier: RideTier, is_peak_hours: bool) -> Result<FareQuote, Error> {
    let request = FareRequest::new(distance_km, ride_tier, is_peak_hours.into())?;

    FareSchedule::default().quote(&request)
}

/// Amounts at or above this carry no cent digits.
const WHOLE_AMOUNT_THRESHOLD: f64 = 4_503_599_627_370_496.0 / 100.0;

/// Round to cents, halves away from zero.
pub fn round_currency(amount: f64) -> f64 {
    if amount.abs() >= WHOLE_AMOUNT_THRESHOLD {
        return amount;
    }

    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_trip_hits_minimum_fare() {
        let quote = estimate(1.0, RideTier::Economy, false).unwrap();
        assert_eq!(quote.base_fare, 4.50);
        assert_eq!(quote.surge_amount, None);
        assert_eq!(quote.total_fare, 4.50);
    }

    #[test]
    fn economy_fare_is_distance_times_rate() {
        let quote = estimate(10.0, RideTier::Economy, false).unwrap();
        assert_eq!(quote.base_fare, 25.00);
        assert_eq!(quote.surge_amount, None);
        assert_eq!(quote.total_fare, 25.00);
    }

    #[test]
    fn tier_multiplier_scales_base_fare() {
        let quote = estimate(10.0, RideTier::Comfort, false).unwrap();
        assert_eq!(quote.base_fare, 37.50);
        assert_eq!(quote.total_fare, 37.50);
        assert_eq!(quote.tier_multiplier, 1.5);

        let quote = estimate(10.0, RideTier::Premium, false).unwrap();
        assert_eq!(quote.base_fare, 50.00);
        assert_eq!(quote.total_fare, 50.00);
    }

    #[test]
    fn peak_hours_add_surge() {
        let quote = estimate(10.0, RideTier::Economy, true).unwrap();
        assert_eq!(quote.base_fare, 25.00);
        assert_eq!(quote.surge_amount, Some(12.50));
        assert_eq!(quote.total_fare, 37.50);
        assert_eq!(quote.surge_multiplier, 1.5);
    }

    #[test]
    fn surge_applies_on_top_of_minimum_fare() {
        let quote = estimate(0.5, RideTier::Economy, true).unwrap();
        assert_eq!(quote.base_fare, 4.50);
        assert_eq!(quote.surge_amount, Some(2.25));
        assert_eq!(quote.total_fare, 6.75);
    }

    #[test]
    fn invalid_distance_is_rejected() {
        assert!(estimate(0.0, RideTier::Economy, false).unwrap_err().is_invalid_input());
        assert!(estimate(-5.0, RideTier::Economy, false).unwrap_err().is_invalid_input());
        assert!(estimate(f64::NAN, RideTier::Economy, false).is_err());
    }

    #[test]
    fn total_never_falls_below_minimum() {
        let distances = [0.001, 0.01, 0.1, 0.5, 1.0, 1.79, 1.8, 1.81, 3.3, 42.0, 1234.5];

        for distance_km in distances {
            for tier in RideTier::ALL {
                for is_peak_hours in [false, true] {
                    let quote = estimate(distance_km, tier, is_peak_hours).unwrap();
                    assert!(quote.total_fare >= MINIMUM_FARE, "{:?}", quote);
                    assert!(quote.total_fare >= quote.base_fare, "{:?}", quote);
                }
            }
        }
    }

    #[test]
    fn amounts_are_rounded_to_cents() {
        let quote = estimate(3.333, RideTier::Comfort, true).unwrap();
        assert_eq!(quote.base_fare, 12.50);
        assert_eq!(quote.surge_amount, Some(6.25));
        assert_eq!(quote.total_fare, 18.75);

        let quote = estimate(7.123, RideTier::Economy, false).unwrap();
        assert_eq!(quote.base_fare, 17.81);
        assert_eq!(quote.total_fare, 17.81);
    }

    #[test]
    fn repeated_estimates_are_identical() {
        let first = estimate(13.7, RideTier::Premium, true).unwrap();

        for _ in 0..10 {
            let next = estimate(13.7, RideTier::Premium, true).unwrap();
            assert_eq!(next.total_fare.to_bits(), first.total_fare.to_bits());
            assert_eq!(next, first);
        }
    }

    #[test]
    fn custom_schedule_is_honoured() {
        let schedule = FareSchedule {
            base_rate_per_km: 1.0,
            minimum_fare: 10.0,
            peak_surge_multiplier: 2.0,
        };

        let request = FareRequest::new(4.0, RideTier::Economy, TimeOfDay::Peak).unwrap();
        let quote = schedule.quote(&request).unwrap();
        assert_eq!(quote.base_fare, 10.0);
        assert_eq!(quote.surge_amount, Some(10.0));
        assert_eq!(quote.total_fare, 20.0);
    }

    #[test]
    fn surge_that_rounds_to_zero_is_omitted() {
        let schedule = FareSchedule {
            peak_surge_multiplier: 1.0001,
            ..FareSchedule::default()
        };

        let request = FareRequest::new(1.0, RideTier::Economy, TimeOfDay::Peak).unwrap();
        let quote = schedule.quote(&request).unwrap();
        assert_eq!(quote.surge_amount, None);
        assert_eq!(quote.total_fare, 4.50);
    }

    #[test]
    fn total_is_rounded_from_unrounded_parts() {
        // 5.15625 + 2.578125 = 7.734375: parts round up, the total rounds down.
        let quote = estimate(2.0625, RideTier::Economy, true).unwrap();
        assert_eq!(quote.base_fare, 5.16);
        assert_eq!(quote.surge_amount, Some(2.58));
        assert_eq!(quote.total_fare, 7.73);
    }

    #[test]
    fn huge_distance_stays_finite() {
        let quote = estimate(1e306, RideTier::Economy, false).unwrap();
        assert!(quote.base_fare.is_finite());
        assert!(quote.total_fare.is_finite());
        assert_eq!(quote.base_fare, 1e306 * BASE_RATE_PER_KM);

        let value = serde_json::to_value(&quote).unwrap();
        let decoded: FareQuote = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, quote);
    }

    #[test]
    fn overflowing_fare_is_rejected() {
        let err = estimate(f64::MAX, RideTier::Premium, true).unwrap_err();
        assert!(err.is_invalid_input());

        assert!(estimate(1e308, RideTier::Premium, true).unwrap_err().is_invalid_input());
    }

    #[test]
    fn rounding_leaves_whole_amounts_alone() {
        assert_eq!(round_currency(1e20), 1e20);
        assert_eq!(round_currency(-1e20), -1e20);
        assert_eq!(round_currency(2.375), 2.38);
    }
}
