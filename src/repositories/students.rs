use sqlx::{PgPool, Postgres, QueryBuilder};
use time::{Date, PrimitiveDateTime};

use crate::db::models::Student;
use crate::db::types::VerificationStatus;

const COLUMNS: &str = "\
    id, user_id, nisn, full_name, birth_date, origin_school, regency, district, address, \
    phone, wave_id, verification_status, exam_number, cbt_password, verified_at, \
    created_at, updated_at";

pub(crate) struct CreateStudent<'a> {
    pub(crate) id: &'a str,
    pub(crate) user_id: Option<&'a str>,
    pub(crate) nisn: &'a str,
    pub(crate) full_name: &'a str,
    pub(crate) birth_date: Date,
    pub(crate) origin_school: &'a str,
    pub(crate) regency: &'a str,
    pub(crate) district: &'a str,
    pub(crate) address: &'a str,
    pub(crate) phone: &'a str,
    pub(crate) wave_id: Option<&'a str>,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: CreateStudent<'_>) -> Result<Student, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!(
        "INSERT INTO students (
            id, user_id, nisn, full_name, birth_date, origin_school, regency, district,
            address, phone, wave_id, verification_status, created_at, updated_at
         ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,'PENDING',$12,$12)
         RETURNING {COLUMNS}",
    ))
    .bind(params.id)
    .bind(params.user_id)
    .bind(params.nisn)
    .bind(params.full_name)
    .bind(params.birth_date)
    .bind(params.origin_school)
    .bind(params.regency)
    .bind(params.district)
    .bind(params.address)
    .bind(params.phone)
    .bind(params.wave_id)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!("SELECT {COLUMNS} FROM students WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn find_by_user_id(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!("SELECT {COLUMNS} FROM students WHERE user_id = $1"))
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn exists_by_nisn(pool: &PgPool, nisn: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM students WHERE nisn = $1)")
        .bind(nisn)
        .fetch_one(pool)
        .await
}

pub(crate) struct ListStudents<'a> {
    pub(crate) status: Option<VerificationStatus>,
    pub(crate) search: Option<&'a str>,
    pub(crate) skip: i64,
    pub(crate) limit: i64,
}

pub(crate) async fn list(
    pool: &PgPool,
    params: ListStudents<'_>,
) -> Result<(Vec<Student>, i64), sqlx::Error> {
    let mut count_builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM students");
    push_filters(&mut count_builder, &params);
    let total = count_builder.build_query_scalar::<i64>().fetch_one(pool).await?;

    let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM students"));
    push_filters(&mut builder, &params);
    builder.push(" ORDER BY created_at DESC, id");
    builder.push(" OFFSET ");
    builder.push_bind(params.skip.max(0));
    builder.push(" LIMIT ");
    builder.push_bind(params.limit.clamp(1, 1000));

    let students = builder.build_query_as::<Student>().fetch_all(pool).await?;
    Ok((students, total))
}

fn push_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, params: &ListStudents<'a>) {
    let mut has_where = false;

    if let Some(status) = params.status {
        builder.push(" WHERE verification_status = ");
        builder.push_bind(status);
        has_where = true;
    }

    if let Some(search) = params.search.map(str::trim).filter(|value| !value.is_empty()) {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("(full_name ILIKE ");
        builder.push_bind(format!("%{search}%"));
        builder.push(" OR nisn = ");
        builder.push_bind(search);
        builder.push(")");
    }
}

/// Verified students holding an exam number, in issuance order.
///
/// Shorter numbers sort first so `PPDB-10000` lands after `PPDB-9999` once the four-digit
/// padding is outgrown.
pub(crate) async fn list_exam_participants(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!(
        "SELECT {COLUMNS} FROM students
         WHERE verification_status = 'VERIFIED' AND exam_number IS NOT NULL
         ORDER BY char_length(exam_number) ASC, exam_number ASC"
    ))
    .fetch_all(pool)
    .await
}

#[derive(Debug, Clone, Copy, Default, sqlx::FromRow)]
pub(crate) struct StatusCounts {
    pub(crate) total: i64,
    pub(crate) pending: i64,
    pub(crate) verified: i64,
    pub(crate) rejected: i64,
}

pub(crate) async fn count_by_status(pool: &PgPool) -> Result<StatusCounts, sqlx::Error> {
    sqlx::query_as::<_, StatusCounts>(
        "SELECT
            COUNT(*) AS total,
            COUNT(*) FILTER (WHERE verification_status = 'PENDING') AS pending,
            COUNT(*) FILTER (WHERE verification_status = 'VERIFIED') AS verified,
            COUNT(*) FILTER (WHERE verification_status = 'REJECTED') AS rejected
         FROM students",
    )
    .fetch_one(pool)
    .await
}

pub(crate) async fn next_exam_sequence(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT nextval('exam_number_seq')").fetch_one(pool).await
}

pub(crate) struct MarkVerified<'a> {
    pub(crate) exam_number: &'a str,
    pub(crate) cbt_password: &'a str,
    pub(crate) verified_at: PrimitiveDateTime,
}

pub(crate) async fn mark_verified(
    pool: &PgPool,
    id: &str,
    params: MarkVerified<'_>,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!(
        "UPDATE students SET
            verification_status = 'VERIFIED',
            exam_number = $1,
            cbt_password = $2,
            verified_at = $3,
            updated_at = $3
         WHERE id = $4
         RETURNING {COLUMNS}"
    ))
    .bind(params.exam_number)
    .bind(params.cbt_password)
    .bind(params.verified_at)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Moves a student out of `VERIFIED`, dropping the exam credentials with it.
pub(crate) async fn mark_unverified(
    pool: &PgPool,
    id: &str,
    status: VerificationStatus,
    updated_at: PrimitiveDateTime,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!(
        "UPDATE students SET
            verification_status = $1,
            exam_number = NULL,
            cbt_password = NULL,
            verified_at = NULL,
            updated_at = $2
         WHERE id = $3
         RETURNING {COLUMNS}"
    ))
    .bind(status)
    .bind(updated_at)
    .bind(id)
    .fetch_optional(pool)
    .await
}
