use serde::{Deserialize, Serialize};
use validator::Validate;

use super::default_true;
use crate::db::models::CatalogItem;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct CatalogItemCreate {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub(crate) name: String,
    #[serde(default, alias = "order_index")]
    #[validate(range(min = 0, message = "order must be non-negative"))]
    pub(crate) order: i32,
    #[serde(default = "default_true", alias = "isActive")]
    pub(crate) is_active: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct CatalogItemUpdate {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub(crate) name: Option<String>,
    #[serde(default, alias = "order_index")]
    #[validate(range(min = 0, message = "order must be non-negative"))]
    pub(crate) order: Option<i32>,
    #[serde(default, alias = "isActive")]
    pub(crate) is_active: Option<bool>,
}

/// Subject or semester as the front-end sees it; `order_index` is exposed as `order`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogItemResponse {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) order: i32,
    pub(crate) is_active: bool,
}

impl From<CatalogItem> for CatalogItemResponse {
    fn from(item: CatalogItem) -> Self {
        Self { id: item.id, name: item.name, order: item.order_index, is_active: item.is_active }
    }
}
