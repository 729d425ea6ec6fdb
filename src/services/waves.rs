use sqlx::PgPool;

use crate::db::models::Wave;
use crate::repositories;

/// All registration waves ordered by start date. Empty when the query fails.
pub(crate) async fn fetch_waves(pool: &PgPool) -> Vec<Wave> {
    repositories::waves::list_all(pool).await.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to load registration waves");
        Vec::new()
    })
}
