use axum::extract::{Extension, Json};

use crate::entities::RideTierInfo;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<RideTierInfo>>, Error> {
    let tiers = api.ride_tiers().await?;

    Ok(tiers.into())
}
