use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::Wave;

const COLUMNS: &str =
    "id, name, description, start_date, end_date, quota, is_active, created_at, updated_at";

pub(crate) async fn list_all(pool: &PgPool) -> Result<Vec<Wave>, sqlx::Error> {
    sqlx::query_as::<_, Wave>(&format!("SELECT {COLUMNS} FROM waves ORDER BY start_date ASC, id"))
        .fetch_all(pool)
        .await
}

pub(crate) async fn list_active(pool: &PgPool) -> Result<Vec<Wave>, sqlx::Error> {
    sqlx::query_as::<_, Wave>(&format!(
        "SELECT {COLUMNS} FROM waves WHERE is_active = TRUE ORDER BY start_date ASC, id"
    ))
    .fetch_all(pool)
    .await
}

pub(crate) async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM waves WHERE is_active = TRUE")
        .fetch_one(pool)
        .await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Wave>, sqlx::Error> {
    sqlx::query_as::<_, Wave>(&format!("SELECT {COLUMNS} FROM waves WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn count_registrations(pool: &PgPool, wave_id: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students WHERE wave_id = $1")
        .bind(wave_id)
        .fetch_one(pool)
        .await
}

pub(crate) struct CreateWave<'a> {
    pub(crate) id: &'a str,
    pub(crate) name: &'a str,
    pub(crate) description: Option<&'a str>,
    pub(crate) start_date: PrimitiveDateTime,
    pub(crate) end_date: PrimitiveDateTime,
    pub(crate) quota: Option<i32>,
    pub(crate) is_active: bool,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: CreateWave<'_>) -> Result<Wave, sqlx::Error> {
    sqlx::query_as::<_, Wave>(&format!(
        "INSERT INTO waves (
            id, name, description, start_date, end_date, quota, is_active, created_at, updated_at
         ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$8)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.name)
    .bind(params.description)
    .bind(params.start_date)
    .bind(params.end_date)
    .bind(params.quota)
    .bind(params.is_active)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}

pub(crate) struct UpdateWave {
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) start_date: Option<PrimitiveDateTime>,
    pub(crate) end_date: Option<PrimitiveDateTime>,
    pub(crate) quota: Option<i32>,
    pub(crate) is_active: Option<bool>,
    pub(crate) updated_at: PrimitiveDateTime,
}

pub(crate) async fn update(
    pool: &PgPool,
    id: &str,
    params: UpdateWave,
) -> Result<Option<Wave>, sqlx::Error> {
    sqlx::query_as::<_, Wave>(&format!(
        "UPDATE waves SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            start_date = COALESCE($3, start_date),
            end_date = COALESCE($4, end_date),
            quota = COALESCE($5, quota),
            is_active = COALESCE($6, is_active),
            updated_at = $7
         WHERE id = $8
         RETURNING {COLUMNS}"
    ))
    .bind(params.name)
    .bind(params.description)
    .bind(params.start_date)
    .bind(params.end_date)
    .bind(params.quota)
    .bind(params.is_active)
    .bind(params.updated_at)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM waves WHERE id = $1").bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
