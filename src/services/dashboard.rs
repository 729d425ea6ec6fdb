use serde::Serialize;
use sqlx::PgPool;

use crate::repositories;

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) struct DashboardStats {
    pub(crate) total_students: i64,
    pub(crate) pending_students: i64,
    pub(crate) verified_students: i64,
    pub(crate) rejected_students: i64,
    pub(crate) announcements: i64,
    pub(crate) active_waves: i64,
}

/// Zeroes are reported when any of the counts fails.
pub(crate) async fn dashboard_stats(pool: &PgPool) -> DashboardStats {
    match load(pool).await {
        Ok(stats) => stats,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load dashboard statistics");
            DashboardStats::default()
        }
    }
}

async fn load(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
    let students = repositories::students::count_by_status(pool).await?;
    let announcements = repositories::announcements::count(pool).await?;
    let active_waves = repositories::waves::count_active(pool).await?;

    Ok(DashboardStats {
        total_students: students.total,
        pending_students: students.pending,
        verified_students: students.verified,
        rejected_students: students.rejected,
        announcements,
        active_waves,
    })
}
