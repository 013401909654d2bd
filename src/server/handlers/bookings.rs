use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::BookingEstimate;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct EstimateParams {
    #[serde(default)]
    pickup: String,
    #[serde(default)]
    dropoff: String,
    #[serde(default = "default_ride_tier")]
    ride_tier: String,
}

fn default_ride_tier() -> String {
    "economy".into()
}

pub async fn estimate(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<EstimateParams>,
) -> Result<Json<BookingEstimate>, Error> {
    let estimate = api
        .estimate_booking(&params.pickup, &params.dropoff, &params.ride_tier)
        .await?;

    Ok(estimate.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio_test::block_on;

    use super::*;
    use crate::config::UnknownTierPolicy;
    use crate::engine::test_engine;

    fn api() -> DynAPI {
        Arc::new(test_engine(UnknownTierPolicy::Economy))
    }

    fn params(body: serde_json::Value) -> Json<EstimateParams> {
        Json(serde_json::from_value(body).unwrap())
    }

    #[test]
    fn estimate_returns_booking() {
        let body = serde_json::json!({ "pickup": "Old Town", "dropoff": "Airport", "ride_tier": "premium" });

        let Json(estimate) = block_on(estimate(Extension(api()), params(body))).unwrap();
        assert_eq!(estimate.pickup, "Old Town");
        assert!(estimate.fare >= 9.0);
    }

    #[test]
    fn missing_dropoff_is_invalid() {
        let body = serde_json::json!({ "pickup": "Old Town" });

        let err = block_on(estimate(Extension(api()), params(body))).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
