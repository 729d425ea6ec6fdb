//! Exam credentials handed to the CBT (computer-based test) system.

use serde::Serialize;
use sqlx::PgPool;

use crate::db::models::Student;
use crate::db::types::VerificationStatus;
use crate::repositories;

/// One login for the CBT system. Field names are the import format the CBT side expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CbtCredential {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) fullname: String,
}

impl CbtCredential {
    /// Only verified students with an exam number and password have usable credentials.
    pub(crate) fn from_student(student: Student) -> Option<Self> {
        if student.verification_status != VerificationStatus::Verified {
            return None;
        }

        Some(Self {
            username: student.exam_number?,
            password: student.cbt_password?,
            fullname: student.full_name,
        })
    }
}

/// Credentials for every exam participant, ordered by exam number. Failures are logged and
/// reported as an empty export.
pub(crate) async fn fetch_cbt_credentials(pool: &PgPool) -> Vec<CbtCredential> {
    let students = match repositories::students::list_exam_participants(pool).await {
        Ok(students) => students,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load CBT export rows");
            return Vec::new();
        }
    };

    let credentials: Vec<CbtCredential> =
        students.into_iter().filter_map(CbtCredential::from_student).collect();

    tracing::info!(rows = credentials.len(), "CBT credentials exported");
    credentials
}
