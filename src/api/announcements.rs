use axum::{extract::State, routing::get, Json, Router};

use crate::core::state::AppState;
use crate::schemas::announcement::AnnouncementResponse;
use crate::services::announcements;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(list_published))
}

async fn list_published(State(state): State<AppState>) -> Json<Vec<AnnouncementResponse>> {
    let items = announcements::fetch_public_announcements(state.db()).await;
    Json(items.into_iter().map(AnnouncementResponse::from).collect())
}
