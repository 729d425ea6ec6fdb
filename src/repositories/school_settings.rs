use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::SchoolSettings;

const COLUMNS: &str = "school_name, logo_url, address, phone, email, academic_year, updated_at";

pub(crate) async fn find(pool: &PgPool) -> Result<Option<SchoolSettings>, sqlx::Error> {
    sqlx::query_as::<_, SchoolSettings>(&format!("SELECT {COLUMNS} FROM school_settings WHERE id = 1"))
        .fetch_optional(pool)
        .await
}

pub(crate) struct UpsertSettings<'a> {
    pub(crate) school_name: &'a str,
    pub(crate) logo_url: Option<&'a str>,
    pub(crate) address: Option<&'a str>,
    pub(crate) phone: Option<&'a str>,
    pub(crate) email: Option<&'a str>,
    pub(crate) academic_year: Option<&'a str>,
    pub(crate) updated_at: PrimitiveDateTime,
}

pub(crate) async fn upsert(
    pool: &PgPool,
    params: UpsertSettings<'_>,
) -> Result<SchoolSettings, sqlx::Error> {
    sqlx::query_as::<_, SchoolSettings>(&format!(
        "INSERT INTO school_settings (
            id, school_name, logo_url, address, phone, email, academic_year, updated_at
         ) VALUES (1,$1,$2,$3,$4,$5,$6,$7)
         ON CONFLICT (id) DO UPDATE SET
            school_name = EXCLUDED.school_name,
            logo_url = EXCLUDED.logo_url,
            address = EXCLUDED.address,
            phone = EXCLUDED.phone,
            email = EXCLUDED.email,
            academic_year = EXCLUDED.academic_year,
            updated_at = EXCLUDED.updated_at
         RETURNING {COLUMNS}"
    ))
    .bind(params.school_name)
    .bind(params.logo_url)
    .bind(params.address)
    .bind(params.phone)
    .bind(params.email)
    .bind(params.academic_year)
    .bind(params.updated_at)
    .fetch_one(pool)
    .await
}
