use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::CurrentAdmin;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories::{
    self,
    waves::{CreateWave, UpdateWave},
};
use crate::schemas::wave::{WaveCreate, WaveResponse, WaveUpdate};
use crate::services::waves;

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_waves).post(create_wave))
        .route("/:wave_id", patch(update_wave).delete(delete_wave))
}

async fn list_waves(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Json<Vec<WaveResponse>> {
    let items = waves::fetch_waves(state.db()).await;
    Json(items.into_iter().map(WaveResponse::from).collect())
}

async fn create_wave(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Json(payload): Json<WaveCreate>,
) -> Result<(StatusCode, Json<WaveResponse>), ApiError> {
    payload.validate()?;
    if payload.end_date <= payload.start_date {
        return Err(ApiError::BadRequest("end_date must be after start_date".to_string()));
    }

    let wave = repositories::waves::create(
        state.db(),
        CreateWave {
            id: &Uuid::new_v4().to_string(),
            name: payload.name.trim(),
            description: payload.description.as_deref(),
            start_date: payload.start_date,
            end_date: payload.end_date,
            quota: payload.quota,
            is_active: payload.is_active,
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create wave"))?;

    Ok((StatusCode::CREATED, Json(wave.into())))
}

async fn update_wave(
    Path(wave_id): Path<String>,
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Json(payload): Json<WaveUpdate>,
) -> Result<Json<WaveResponse>, ApiError> {
    payload.validate()?;

    let wave = repositories::waves::find_by_id(state.db(), &wave_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load wave"))?
        .ok_or_else(|| ApiError::NotFound("Wave not found".to_string()))?;

    let effective_start = payload.start_date.unwrap_or(wave.start_date);
    let effective_end = payload.end_date.unwrap_or(wave.end_date);
    if effective_end <= effective_start {
        return Err(ApiError::BadRequest("end_date must be after start_date".to_string()));
    }

    repositories::waves::update(
        state.db(),
        &wave_id,
        UpdateWave {
            name: payload.name.map(|name| name.trim().to_string()),
            description: payload.description,
            start_date: payload.start_date,
            end_date: payload.end_date,
            quota: payload.quota,
            is_active: payload.is_active,
            updated_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to update wave"))?
    .map(|wave| Json(wave.into()))
    .ok_or_else(|| ApiError::NotFound("Wave not found".to_string()))
}

async fn delete_wave(
    Path(wave_id): Path<String>,
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Result<StatusCode, ApiError> {
    let registrations = repositories::waves::count_registrations(state.db(), &wave_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to count wave registrations"))?;
    if registrations > 0 {
        return Err(ApiError::Conflict(format!(
            "Wave has {registrations} registrations; deactivate it instead"
        )));
    }

    let deleted = repositories::waves::delete(state.db(), &wave_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete wave"))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Wave not found".to_string()))
    }
}
