//! Subjects and semesters: two reference lists with an identical row shape.

use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::CatalogItem;

const COLUMNS: &str = "id, name, order_index, is_active, created_at, updated_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Catalog {
    Subjects,
    Semesters,
}

impl Catalog {
    fn table(self) -> &'static str {
        match self {
            Self::Subjects => "subjects",
            Self::Semesters => "semesters",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Subjects => "subject",
            Self::Semesters => "semester",
        }
    }
}

pub(crate) async fn list_all(pool: &PgPool, catalog: Catalog) -> Result<Vec<CatalogItem>, sqlx::Error> {
    sqlx::query_as::<_, CatalogItem>(&format!(
        "SELECT {COLUMNS} FROM {} ORDER BY order_index ASC, name",
        catalog.table()
    ))
    .fetch_all(pool)
    .await
}

pub(crate) async fn list_active(
    pool: &PgPool,
    catalog: Catalog,
) -> Result<Vec<CatalogItem>, sqlx::Error> {
    sqlx::query_as::<_, CatalogItem>(&format!(
        "SELECT {COLUMNS} FROM {} WHERE is_active = TRUE ORDER BY order_index ASC, name",
        catalog.table()
    ))
    .fetch_all(pool)
    .await
}

pub(crate) struct CreateItem<'a> {
    pub(crate) id: &'a str,
    pub(crate) name: &'a str,
    pub(crate) order_index: i32,
    pub(crate) is_active: bool,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    catalog: Catalog,
    params: CreateItem<'_>,
) -> Result<CatalogItem, sqlx::Error> {
    sqlx::query_as::<_, CatalogItem>(&format!(
        "INSERT INTO {} (id, name, order_index, is_active, created_at, updated_at)
         VALUES ($1,$2,$3,$4,$5,$5)
         RETURNING {COLUMNS}",
        catalog.table()
    ))
    .bind(params.id)
    .bind(params.name)
    .bind(params.order_index)
    .bind(params.is_active)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}

pub(crate) struct UpdateItem {
    pub(crate) name: Option<String>,
    pub(crate) order_index: Option<i32>,
    pub(crate) is_active: Option<bool>,
    pub(crate) updated_at: PrimitiveDateTime,
}

pub(crate) async fn update(
    pool: &PgPool,
    catalog: Catalog,
    id: &str,
    params: UpdateItem,
) -> Result<Option<CatalogItem>, sqlx::Error> {
    sqlx::query_as::<_, CatalogItem>(&format!(
        "UPDATE {} SET
            name = COALESCE($1, name),
            order_index = COALESCE($2, order_index),
            is_active = COALESCE($3, is_active),
            updated_at = $4
         WHERE id = $5
         RETURNING {COLUMNS}",
        catalog.table()
    ))
    .bind(params.name)
    .bind(params.order_index)
    .bind(params.is_active)
    .bind(params.updated_at)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn delete(pool: &PgPool, catalog: Catalog, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", catalog.table()))
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
