use std::sync::Arc;

use sqlx::PgPool;

use crate::core::cache::CacheTags;
use crate::core::{config::Settings, redis::RedisHandle};
use crate::services::school_settings::SchoolSettingsCache;

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    db: PgPool,
    redis: RedisHandle,
    cache_tags: Arc<CacheTags>,
    school_settings: SchoolSettingsCache,
}

impl AppState {
    pub(crate) fn new(settings: Settings, db: PgPool, redis: RedisHandle) -> Self {
        let cache_tags = Arc::new(CacheTags::new());
        let school_settings =
            SchoolSettingsCache::new(settings.cache().settings_ttl(), cache_tags.clone());
        Self { inner: Arc::new(InnerState { settings, db, redis, cache_tags, school_settings }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn db(&self) -> &PgPool {
        &self.inner.db
    }

    pub(crate) fn redis(&self) -> &RedisHandle {
        &self.inner.redis
    }

    pub(crate) fn cache_tags(&self) -> &CacheTags {
        &self.inner.cache_tags
    }

    pub(crate) fn school_settings(&self) -> &SchoolSettingsCache {
        &self.inner.school_settings
    }
}
