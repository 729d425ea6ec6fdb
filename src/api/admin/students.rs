use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::api::guards::CurrentAdmin;
use crate::api::pagination::PaginatedResponse;
use crate::core::state::AppState;
use crate::repositories::{self, students::ListStudents};
use crate::schemas::student::{StudentListQuery, StudentResponse, VerificationUpdate};
use crate::services::verification::{self, VerificationError};

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students))
        .route("/:student_id", get(get_student))
        .route("/:student_id/verification", patch(update_verification))
}

async fn list_students(
    Query(params): Query<StudentListQuery>,
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Result<Json<PaginatedResponse<StudentResponse>>, ApiError> {
    let skip = params.skip.max(0);
    let limit = params.limit.clamp(1, 1000);

    let (students, total_count) = repositories::students::list(
        state.db(),
        ListStudents { status: params.status, search: params.search.as_deref(), skip, limit },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to list students"))?;

    Ok(Json(PaginatedResponse {
        items: students.into_iter().map(StudentResponse::from).collect(),
        total_count,
        skip,
        limit,
    }))
}

async fn get_student(
    Path(student_id): Path<String>,
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Result<Json<StudentResponse>, ApiError> {
    repositories::students::find_by_id(state.db(), &student_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load student"))?
        .map(|student| Json(student.into()))
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))
}

async fn update_verification(
    Path(student_id): Path<String>,
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(payload): Json<VerificationUpdate>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = verification::verify_student(
        state.db(),
        &student_id,
        payload.status,
        &state.settings().portal().exam_number_prefix,
    )
    .await
    .map_err(|err| match err {
        VerificationError::NotFound => ApiError::NotFound("Student not found".to_string()),
        VerificationError::Database(e) => ApiError::internal(e, "Failed to update verification"),
    })?;

    tracing::info!(admin_id = %admin.id, student_id = %student.id, "Verification changed by admin");
    Ok(Json(student.into()))
}
