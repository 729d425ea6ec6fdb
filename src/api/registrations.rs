use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::CurrentUser;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories::{self, students::CreateStudent};
use crate::schemas::student::{RegistrationCreate, StudentResponse};
use crate::services::regions;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", post(register))
}

/// Public registration. A signed-in applicant gets the new record linked to their account.
async fn register(
    State(state): State<AppState>,
    user: Option<CurrentUser>,
    Json(payload): Json<RegistrationCreate>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    payload.validate()?;

    let (regency, district) = regions::canonical_pair(&payload.regency, &payload.district)
        .ok_or_else(|| ApiError::BadRequest("Unknown regency or district".to_string()))?;

    let now = primitive_now_utc();
    let wave = repositories::waves::find_by_id(state.db(), &payload.wave_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load registration wave"))?
        .ok_or_else(|| ApiError::BadRequest("Unknown registration wave".to_string()))?;
    if !wave.is_open_at(now) {
        return Err(ApiError::BadRequest("Registration wave is not open".to_string()));
    }
    if let Some(quota) = wave.quota {
        let registered = repositories::waves::count_registrations(state.db(), &wave.id)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to count wave registrations"))?;
        if registered >= i64::from(quota) {
            return Err(ApiError::Conflict("Registration wave is full".to_string()));
        }
    }

    let exists = repositories::students::exists_by_nisn(state.db(), &payload.nisn)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to check existing registration"))?;
    if exists {
        return Err(ApiError::Conflict("NISN already registered".to_string()));
    }

    let user_id = user.map(|CurrentUser(user)| user.id);
    let student = repositories::students::create(
        state.db(),
        CreateStudent {
            id: &Uuid::new_v4().to_string(),
            user_id: user_id.as_deref(),
            nisn: &payload.nisn,
            full_name: payload.full_name.trim(),
            birth_date: payload.birth_date,
            origin_school: payload.origin_school.trim(),
            regency,
            district,
            address: payload.address.trim(),
            phone: &payload.phone,
            wave_id: Some(&wave.id),
            created_at: now,
        },
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            ApiError::Conflict("NISN already registered".to_string())
        }
        other => ApiError::internal(other, "Failed to create registration"),
    })?;

    tracing::info!(student_id = %student.id, wave_id = %wave.id, "Registration received");
    Ok((StatusCode::CREATED, Json(StudentResponse::from(student))))
}
