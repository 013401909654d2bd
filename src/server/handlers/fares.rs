use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{FareQuote, TimeOfDay};
use crate::error::{invalid_input_error, Error};
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct EstimateParams {
    #[serde(default)]
    distance_km: Option<Value>,
    #[serde(default = "default_ride_tier")]
    ride_tier: String,
    #[serde(default)]
    time_of_day: TimeOfDay,
}

fn default_ride_tier() -> String {
    "economy".into()
}

/// Accepts a JSON number or a numeric string, as submitted by a form field.
fn parse_distance(value: Option<&Value>) -> Result<f64, Error> {
    let distance_km = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    distance_km.ok_or_else(invalid_input_error)
}

pub async fn estimate(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<EstimateParams>,
) -> Result<Json<FareQuote>, Error> {
    let distance_km = parse_distance(params.distance_km.as_ref())?;

    let quote = api
        .estimate_fare(distance_km, &params.ride_tier, params.time_of_day)
        .await?;

    Ok(quote.into())
}
