use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, PrimitiveDateTime};

use crate::db::types::{UserRole, VerificationStatus};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct User {
    pub(crate) id: String,
    pub(crate) email: String,
    pub(crate) hashed_password: String,
    pub(crate) full_name: String,
    pub(crate) role: UserRole,
    pub(crate) is_active: bool,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

impl User {
    pub(crate) fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Student {
    pub(crate) id: String,
    pub(crate) user_id: Option<String>,
    pub(crate) nisn: String,
    pub(crate) full_name: String,
    pub(crate) birth_date: Date,
    pub(crate) origin_school: String,
    pub(crate) regency: String,
    pub(crate) district: String,
    pub(crate) address: String,
    pub(crate) phone: String,
    pub(crate) wave_id: Option<String>,
    pub(crate) verification_status: VerificationStatus,
    pub(crate) exam_number: Option<String>,
    pub(crate) cbt_password: Option<String>,
    pub(crate) verified_at: Option<PrimitiveDateTime>,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Announcement {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) is_published: bool,
    pub(crate) created_by: Option<String>,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Wave {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) start_date: PrimitiveDateTime,
    pub(crate) end_date: PrimitiveDateTime,
    pub(crate) quota: Option<i32>,
    pub(crate) is_active: bool,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

impl Wave {
    /// Open for registrations at `now`: active and inside its date range.
    pub(crate) fn is_open_at(&self, now: PrimitiveDateTime) -> bool {
        self.is_active && self.start_date <= now && now <= self.end_date
    }
}

/// Row shape shared by the `subjects` and `semesters` reference lists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct CatalogItem {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) order_index: i32,
    pub(crate) is_active: bool,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct SchoolSettings {
    pub(crate) school_name: String,
    pub(crate) logo_url: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) phone: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) academic_year: Option<String>,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn wave(is_active: bool) -> Wave {
        Wave {
            id: "wave-1".to_string(),
            name: "Gelombang 1".to_string(),
            description: None,
            start_date: datetime!(2025-06-01 00:00),
            end_date: datetime!(2025-06-30 23:59),
            quota: Some(120),
            is_active,
            created_at: datetime!(2025-05-01 00:00),
            updated_at: datetime!(2025-05-01 00:00),
        }
    }

    #[test]
    fn wave_is_open_only_inside_range_when_active() {
        assert!(wave(true).is_open_at(datetime!(2025-06-15 08:00)));
        assert!(wave(true).is_open_at(datetime!(2025-06-01 00:00)));
        assert!(!wave(true).is_open_at(datetime!(2025-07-01 00:00)));
        assert!(!wave(true).is_open_at(datetime!(2025-05-31 23:59)));
        assert!(!wave(false).is_open_at(datetime!(2025-06-15 08:00)));
    }
}
