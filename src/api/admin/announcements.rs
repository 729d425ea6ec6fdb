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
    announcements::{CreateAnnouncement, UpdateAnnouncement},
};
use crate::schemas::announcement::{
    AnnouncementCreate, AnnouncementResponse, AnnouncementUpdate,
};
use crate::services::announcements;

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_announcements).post(create_announcement))
        .route("/:announcement_id", patch(update_announcement).delete(delete_announcement))
}

/// Drafts included, newest first.
async fn list_announcements(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Json<Vec<AnnouncementResponse>> {
    let items = announcements::fetch_all_announcements(state.db()).await;
    Json(items.into_iter().map(AnnouncementResponse::from).collect())
}

async fn create_announcement(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(payload): Json<AnnouncementCreate>,
) -> Result<(StatusCode, Json<AnnouncementResponse>), ApiError> {
    payload.validate()?;

    let announcement = repositories::announcements::create(
        state.db(),
        CreateAnnouncement {
            id: &Uuid::new_v4().to_string(),
            title: payload.title.trim(),
            content: &payload.content,
            is_published: payload.is_published,
            created_by: &admin.id,
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create announcement"))?;

    Ok((StatusCode::CREATED, Json(announcement.into())))
}

async fn update_announcement(
    Path(announcement_id): Path<String>,
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Json(payload): Json<AnnouncementUpdate>,
) -> Result<Json<AnnouncementResponse>, ApiError> {
    payload.validate()?;

    repositories::announcements::update(
        state.db(),
        &announcement_id,
        UpdateAnnouncement {
            title: payload.title.map(|title| title.trim().to_string()),
            content: payload.content,
            is_published: payload.is_published,
            updated_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to update announcement"))?
    .map(|announcement| Json(announcement.into()))
    .ok_or_else(|| ApiError::NotFound("Announcement not found".to_string()))
}

async fn delete_announcement(
    Path(announcement_id): Path<String>,
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Result<StatusCode, ApiError> {
    let deleted = repositories::announcements::delete(state.db(), &announcement_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete announcement"))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Announcement not found".to_string()))
    }
}
