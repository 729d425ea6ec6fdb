//! Signed-in area. Every route here sits behind [`require_session`], so anonymous visitors
//! are redirected to the login page before any handler runs.
//!
//! [`require_session`]: crate::api::guards::require_session

use axum::{extract::State, routing::get, Extension, Json, Router};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::guards::SessionUser;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::announcement::AnnouncementResponse;
use crate::schemas::student::StudentResponse;
use crate::schemas::user::UserResponse;
use crate::services::announcements;

#[derive(Debug, Serialize)]
struct DashboardResponse {
    user: UserResponse,
    student: Option<StudentResponse>,
    announcements: Vec<AnnouncementResponse>,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(overview))
}

async fn overview(
    State(state): State<AppState>,
    Extension(SessionUser(user)): Extension<SessionUser>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let student = repositories::students::find_by_user_id(state.db(), &user.id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load student record"))?;
    let announcements = announcements::fetch_public_announcements(state.db()).await;

    Ok(Json(DashboardResponse {
        user: UserResponse::from_db(user),
        student: student.map(StudentResponse::from),
        announcements: announcements.into_iter().map(AnnouncementResponse::from).collect(),
    }))
}
