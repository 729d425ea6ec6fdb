use axum::{extract::Path, routing::get, Json, Router};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::services::regions;

#[derive(Debug, Serialize)]
struct RegionResponse {
    regency: &'static str,
    districts: &'static [&'static str],
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(list_regencies)).route("/:regency", get(list_districts))
}

async fn list_regencies() -> Json<Vec<&'static str>> {
    Json(regions::regencies().collect())
}

async fn list_districts(Path(regency): Path<String>) -> Result<Json<RegionResponse>, ApiError> {
    let (name, districts) = regions::districts(&regency)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown regency '{regency}'")))?;

    Ok(Json(RegionResponse { regency: name, districts }))
}
