mod booking_api;
mod fare_api;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use crate::{
    api::API,
    config::{Config, UnknownTierPolicy},
    entities::RideTier,
    error::{invalid_input_error, Error},
    pricing::FareSchedule,
};

pub struct Engine {
    schedule: FareSchedule,
    unknown_tier_policy: UnknownTierPolicy,
    booking_rng: Mutex<StdRng>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        let booking_rng = match config.booking_seed {
            Some(seed) => {
                tracing::info!("seeding booking estimates with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Self {
            schedule: config.schedule,
            unknown_tier_policy: config.unknown_tier_policy,
            booking_rng: Mutex::new(booking_rng),
        }
    }
}

impl Engine {
    pub fn resolve_tier(&self, name: &str) -> Result<RideTier, Error> {
        if let Some(tier) = RideTier::parse(name) {
            return Ok(tier);
        }

        match self.unknown_tier_policy {
            UnknownTierPolicy::Economy => {
                tracing::warn!("unknown ride tier {:?}, quoting as economy", name);
                Ok(RideTier::Economy)
            }
            UnknownTierPolicy::Reject => Err(invalid_input_error()),
        }
    }
}

impl API for Engine {}

#[cfg(test)]
pub(crate) fn test_engine(policy: UnknownTierPolicy) -> Engine {
    Engine::new(&Config {
        unknown_tier_policy: policy,
        booking_seed: Some(42),
        ..Config::default()
    })
}

#[test]
fn resolve_known_tier() {
    let engine = test_engine(UnknownTierPolicy::Reject);

    assert_eq!(engine.resolve_tier("comfort").unwrap(), RideTier::Comfort);
}

#[test]
fn resolve_unknown_tier_by_policy() {
    let engine = test_engine(UnknownTierPolicy::Economy);
    assert_eq!(engine.resolve_tier("hovercraft").unwrap(), RideTier::Economy);

    let engine = test_engine(UnknownTierPolicy::Reject);
    assert!(engine.resolve_tier("hovercraft").unwrap_err().is_invalid_input());
}
