//! Student verification and the exam credentials that come with it.

use sqlx::PgPool;
use thiserror::Error;

use crate::core::security::generate_cbt_password;
use crate::core::time::primitive_now_utc;
use crate::db::models::Student;
use crate::db::types::VerificationStatus;
use crate::repositories::{self, students::MarkVerified};

#[derive(Debug, Error)]
pub(crate) enum VerificationError {
    #[error("student not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub(crate) fn format_exam_number(prefix: &str, sequence: i64) -> String {
    format!("{prefix}{sequence:04}")
}

/// Moves a student to `status`.
///
/// Verifying keeps an exam number and password the student already holds and issues fresh
/// ones otherwise. Any other status drops both.
pub(crate) async fn verify_student(
    pool: &PgPool,
    student_id: &str,
    status: VerificationStatus,
    exam_number_prefix: &str,
) -> Result<Student, VerificationError> {
    let student = repositories::students::find_by_id(pool, student_id)
        .await?
        .ok_or(VerificationError::NotFound)?;
    let now = primitive_now_utc();

    let updated = if status == VerificationStatus::Verified {
        let exam_number = match student.exam_number {
            Some(existing) => existing,
            None => {
                let sequence = repositories::students::next_exam_sequence(pool).await?;
                format_exam_number(exam_number_prefix, sequence)
            }
        };
        let cbt_password = student.cbt_password.unwrap_or_else(generate_cbt_password);
        let verified_at = student.verified_at.unwrap_or(now);

        repositories::students::mark_verified(
            pool,
            student_id,
            MarkVerified { exam_number: &exam_number, cbt_password: &cbt_password, verified_at },
        )
        .await?
    } else {
        repositories::students::mark_unverified(pool, student_id, status, now).await?
    };

    let updated = updated.ok_or(VerificationError::NotFound)?;
    tracing::info!(
        student_id = %updated.id,
        status = updated.verification_status.as_str(),
        exam_number = updated.exam_number.as_deref().unwrap_or("-"),
        "Student verification updated"
    );
    Ok(updated)
}
