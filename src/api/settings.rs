use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::core::state::AppState;
use crate::schemas::settings::PublicSettingsResponse;
use crate::services::public_settings;

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(public_settings))
}

/// School settings plus the active waves, subjects and semesters for the registration form.
/// Any failure is reported as an opaque 500.
async fn public_settings(State(state): State<AppState>) -> Response {
    match public_settings::load(state.db(), state.school_settings()).await {
        Ok(payload) => Json(PublicSettingsResponse::from(payload)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to load public settings");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse { message: "Internal server error" }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use time::macros::datetime;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::api::router::router;
    use crate::core::config::Settings;
    use crate::repositories::{self, catalog::Catalog};
    use crate::test_support;

    #[tokio::test]
    async fn database_failure_returns_opaque_500() {
        let _guard = test_support::env_lock().await;
        test_support::set_test_env();
        let settings = Settings::load().expect("settings");
        let app = router(test_support::offline_state(settings));

        let response = app
            .oneshot(test_support::json_request(Method::GET, "/api/v1/settings", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = test_support::read_json(response).await;
        assert_eq!(body, serde_json::json!({"message": "Internal server error"}));
    }

    async fn add_catalog_item(pool: &sqlx::PgPool, catalog: Catalog, name: &str, order: i32, active: bool) {
        repositories::catalog::create(
            pool,
            catalog,
            repositories::catalog::CreateItem {
                id: &Uuid::new_v4().to_string(),
                name,
                order_index: order,
                is_active: active,
                created_at: datetime!(2025-05-01 00:00),
            },
        )
        .await
        .expect("catalog item");
    }

    #[tokio::test]
    #[ignore = "requires postgres"]
    async fn lists_only_active_rows_in_order() {
        let ctx = test_support::setup_test_context().await;
        let db = ctx.state.db();

        test_support::insert_wave(db, "Gelombang 2", datetime!(2025-07-01 00:00), datetime!(2025-07-31 00:00), true).await;
        test_support::insert_wave(db, "Gelombang 1", datetime!(2025-06-01 00:00), datetime!(2025-06-30 00:00), true).await;
        test_support::insert_wave(db, "Arsip", datetime!(2024-06-01 00:00), datetime!(2024-06-30 00:00), false).await;

        add_catalog_item(db, Catalog::Subjects, "IPA", 2, true).await;
        add_catalog_item(db, Catalog::Subjects, "Matematika", 1, true).await;
        add_catalog_item(db, Catalog::Subjects, "Bahasa Jawa", 0, false).await;
        add_catalog_item(db, Catalog::Semesters, "Semester 2", 2, true).await;
        add_catalog_item(db, Catalog::Semesters, "Semester 1", 1, true).await;

        let response = ctx
            .app
            .oneshot(test_support::json_request(Method::GET, "/api/v1/settings", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = test_support::read_json(response).await;

        assert!(body["settings"].is_null());
        let names = |key: &str| -> Vec<String> {
            body[key]
                .as_array()
                .expect("array")
                .iter()
                .map(|item| item["name"].as_str().expect("name").to_string())
                .collect()
        };
        assert_eq!(names("waves"), ["Gelombang 1", "Gelombang 2"]);
        assert_eq!(names("subjects"), ["Matematika", "IPA"]);
        assert_eq!(names("semesters"), ["Semester 1", "Semester 2"]);
        assert_eq!(body["subjects"][0]["order"], 1);
    }
}
