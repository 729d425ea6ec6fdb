//! Cached accessor for the singleton `school_settings` row.
//!
//! Nearly every admin view reads the school name and logo, so the row is kept in memory for
//! the configured TTL (an hour by default). Writers call [`revalidate`] after changing the
//! row; the next read then goes back to the database.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use crate::core::cache::{CacheTags, CachedValue};
use crate::db::models::SchoolSettings;
use crate::repositories;

pub(crate) const SCHOOL_SETTINGS_TAG: &str = "school-settings";

pub(crate) struct SchoolSettingsCache {
    cached: CachedValue<Option<SchoolSettings>>,
}

impl SchoolSettingsCache {
    pub(crate) fn new(ttl: Duration, tags: Arc<CacheTags>) -> Self {
        Self { cached: CachedValue::new(SCHOOL_SETTINGS_TAG, ttl, tags) }
    }

    /// Returns the settings row (or `None` when it was never saved). Query errors propagate.
    pub(crate) async fn get(&self, pool: &PgPool) -> Result<Option<SchoolSettings>, sqlx::Error> {
        self.cached
            .get_or_fetch(|| async {
                tracing::debug!(tag = self.cached.tag(), "Loading school settings from database");
                repositories::school_settings::find(pool).await
            })
            .await
    }
}

/// Forces the next [`SchoolSettingsCache::get`] to refetch.
pub(crate) fn revalidate(tags: &CacheTags) {
    tags.revalidate(SCHOOL_SETTINGS_TAG);
}
