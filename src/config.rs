use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::{config_error, Error};
use crate::pricing::FareSchedule;

/// What to do with a ride tier name that is not in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnknownTierPolicy {
    /// Quote at Economy's multiplier.
    Economy,
    /// Fail with an invalid input error.
    Reject,
}

impl FromStr for UnknownTierPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(Self::Economy),
            "reject" => Ok(Self::Reject),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub schedule: FareSchedule,
    pub unknown_tier_policy: UnknownTierPolicy,
    pub booking_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            schedule: FareSchedule::default(),
            unknown_tier_policy: UnknownTierPolicy::Economy,
            booking_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(err) => Err(err.into()),
        })
    }

    /// Build a config from `lookup`, which returns `None` for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<Option<String>, Error>,
    {
        let defaults = Self::default();

        let addr = parse_or("FAREBOX_ADDR", &lookup, defaults.addr)?;

        let base_rate_per_km = parse_or(
            "FAREBOX_BASE_RATE_PER_KM",
            &lookup,
            defaults.schedule.base_rate_per_km,
        )?;
        if !base_rate_per_km.is_finite() || base_rate_per_km <= 0.0 {
            return Err(config_error("FAREBOX_BASE_RATE_PER_KM"));
        }

        let minimum_fare = parse_or("FAREBOX_MINIMUM_FARE", &lookup, defaults.schedule.minimum_fare)?;
        if !minimum_fare.is_finite() || minimum_fare < 0.0 {
            return Err(config_error("FAREBOX_MINIMUM_FARE"));
        }

        let peak_surge_multiplier = parse_or(
            "FAREBOX_PEAK_SURGE_MULTIPLIER",
            &lookup,
            defaults.schedule.peak_surge_multiplier,
        )?;
        if !peak_surge_multiplier.is_finite() || peak_surge_multiplier < 1.0 {
            return Err(config_error("FAREBOX_PEAK_SURGE_MULTIPLIER"));
        }

        let unknown_tier_policy =
            parse_or("FAREBOX_UNKNOWN_TIER", &lookup, defaults.unknown_tier_policy)?;

        let booking_seed = match lookup("FAREBOX_BOOKING_SEED")? {
            Some(value) => Some(
                value
                    .trim()
                    .parse()
                    .map_err(|_| config_error("FAREBOX_BOOKING_SEED"))?,
            ),
            None => None,
        };

        Ok(Self {
            addr,
            schedule: FareSchedule {
                base_rate_per_km,
                minimum_fare,
                peak_surge_multiplier,
            },
            unknown_tier_policy,
            booking_seed,
        })
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T, Error>
where
    T: FromStr,
    F: Fn(&str) -> Result<Option<String>, Error>,
{
    match lookup(key)? {
        Some(value) => value.trim().parse().map_err(|_| config_error(key)),
        None => Ok(default),
    }
}
