//! Admin surface. Every handler takes [`CurrentAdmin`], so a non-admin token gets 403.

mod announcements;
mod catalog;
mod students;
mod waves;


use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::CurrentAdmin;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories::{self, catalog::Catalog, school_settings::UpsertSettings};
use crate::schemas::settings::{SchoolSettingsResponse, SchoolSettingsUpdate};
use crate::schemas::user::UserResponse;
use crate::services::cbt_export::{self, CbtCredential};
use crate::services::dashboard::{self, DashboardStats};
use crate::services::{layout, school_settings};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AdminLayoutResponse {
    school_name: String,
    logo_url: String,
    user: UserResponse,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/layout", get(admin_layout))
        .route("/dashboard", get(dashboard_stats))
        .route("/cbt-export", get(export_cbt_credentials))
        .route("/settings", get(get_settings).put(update_settings))
        .nest("/announcements", announcements::router())
        .nest("/waves", waves::router())
        .nest("/subjects", catalog::router(Catalog::Subjects))
        .nest("/semesters", catalog::router(Catalog::Semesters))
        .nest("/students", students::router())
}

async fn admin_layout(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
) -> Result<Json<AdminLayoutResponse>, ApiError> {
    let shell = layout::admin_shell(&state)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load school settings"))?;

    Ok(Json(AdminLayoutResponse {
        school_name: shell.school_name,
        logo_url: shell.logo_url,
        user: UserResponse::from_db(admin),
    }))
}

async fn dashboard_stats(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Json<DashboardStats> {
    Json(dashboard::dashboard_stats(state.db()).await)
}

async fn export_cbt_credentials(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
) -> Json<Vec<CbtCredential>> {
    tracing::info!(admin_id = %admin.id, "CBT export requested");
    Json(cbt_export::fetch_cbt_credentials(state.db()).await)
}

async fn get_settings(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Result<Json<Option<SchoolSettingsResponse>>, ApiError> {
    let settings = state
        .school_settings()
        .get(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load school settings"))?;

    Ok(Json(settings.map(SchoolSettingsResponse::from)))
}

/// Saves the settings row and drops the cached copy so readers see the change immediately.
async fn update_settings(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(payload): Json<SchoolSettingsUpdate>,
) -> Result<Json<SchoolSettingsResponse>, ApiError> {
    payload.validate()?;

    let saved = repositories::school_settings::upsert(
        state.db(),
        UpsertSettings {
            school_name: payload.school_name.trim(),
            logo_url: non_blank(payload.logo_url.as_deref()),
            address: non_blank(payload.address.as_deref()),
            phone: non_blank(payload.phone.as_deref()),
            email: non_blank(payload.email.as_deref()),
            academic_year: non_blank(payload.academic_year.as_deref()),
            updated_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to save school settings"))?;

    school_settings::revalidate(state.cache_tags());
    tracing::info!(admin_id = %admin.id, "School settings updated");

    Ok(Json(SchoolSettingsResponse::from(saved)))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
