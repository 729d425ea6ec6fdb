//! Subjects and semesters share one set of handlers; the router carries which list it serves.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::CurrentAdmin;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories::{
    self,
    catalog::{Catalog, CreateItem, UpdateItem},
};
use crate::schemas::catalog::{CatalogItemCreate, CatalogItemResponse, CatalogItemUpdate};

pub(super) fn router(catalog: Catalog) -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:item_id", patch(update_item).delete(delete_item))
        .layer(Extension(catalog))
}

async fn list_items(
    State(state): State<AppState>,
    Extension(catalog): Extension<Catalog>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Result<Json<Vec<CatalogItemResponse>>, ApiError> {
    let items = repositories::catalog::list_all(state.db(), catalog)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list catalog items"))?;

    Ok(Json(items.into_iter().map(CatalogItemResponse::from).collect()))
}

async fn create_item(
    State(state): State<AppState>,
    Extension(catalog): Extension<Catalog>,
    CurrentAdmin(_admin): CurrentAdmin,
    Json(payload): Json<CatalogItemCreate>,
) -> Result<(StatusCode, Json<CatalogItemResponse>), ApiError> {
    payload.validate()?;

    let item = repositories::catalog::create(
        state.db(),
        catalog,
        CreateItem {
            id: &Uuid::new_v4().to_string(),
            name: payload.name.trim(),
            order_index: payload.order,
            is_active: payload.is_active,
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create catalog item"))?;

    tracing::info!(kind = catalog.label(), item_id = %item.id, "Catalog item created");
    Ok((StatusCode::CREATED, Json(item.into())))
}

async fn update_item(
    Path(item_id): Path<String>,
    State(state): State<AppState>,
    Extension(catalog): Extension<Catalog>,
    CurrentAdmin(_admin): CurrentAdmin,
    Json(payload): Json<CatalogItemUpdate>,
) -> Result<Json<CatalogItemResponse>, ApiError> {
    payload.validate()?;

    repositories::catalog::update(
        state.db(),
        catalog,
        &item_id,
        UpdateItem {
            name: payload.name.map(|name| name.trim().to_string()),
            order_index: payload.order,
            is_active: payload.is_active,
            updated_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to update catalog item"))?
    .map(|item| Json(item.into()))
    .ok_or_else(|| not_found(catalog))
}

async fn delete_item(
    Path(item_id): Path<String>,
    State(state): State<AppState>,
    Extension(catalog): Extension<Catalog>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Result<StatusCode, ApiError> {
    let deleted = repositories::catalog::delete(state.db(), catalog, &item_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete catalog item"))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(catalog))
    }
}

fn not_found(catalog: Catalog) -> ApiError {
    ApiError::NotFound(format!("{} not found", capitalize(catalog.label())))
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
