use sqlx::PgPool;

use crate::db::models::Announcement;
use crate::repositories;

/// Published announcements, newest first. Empty when the query fails.
pub(crate) async fn fetch_public_announcements(pool: &PgPool) -> Vec<Announcement> {
    repositories::announcements::list_published(pool).await.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to load published announcements");
        Vec::new()
    })
}

/// Every announcement including drafts, newest first. Empty when the query fails.
pub(crate) async fn fetch_all_announcements(pool: &PgPool) -> Vec<Announcement> {
    repositories::announcements::list_all(pool).await.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to load announcements");
        Vec::new()
    })
}
