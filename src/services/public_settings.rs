//! Aggregate behind the public settings endpoint used by the registration form.

use sqlx::PgPool;

use crate::db::models::{CatalogItem, SchoolSettings, Wave};
use crate::repositories::{self, catalog::Catalog};
use crate::services::school_settings::SchoolSettingsCache;

#[derive(Debug, Clone)]
pub(crate) struct PublicSettings {
    pub(crate) settings: Option<SchoolSettings>,
    pub(crate) waves: Vec<Wave>,
    pub(crate) subjects: Vec<CatalogItem>,
    pub(crate) semesters: Vec<CatalogItem>,
}

/// School settings (through the cache) plus the active waves, subjects and semesters.
///
/// Unlike the other loaders this one propagates failures; the endpoint turns any error into
/// a single opaque 500.
pub(crate) async fn load(
    pool: &PgPool,
    cache: &SchoolSettingsCache,
) -> Result<PublicSettings, sqlx::Error> {
    let settings = cache.get(pool).await?;
    let waves = repositories::waves::list_active(pool).await?;
    let subjects = repositories::catalog::list_active(pool, Catalog::Subjects).await?;
    let semesters = repositories::catalog::list_active(pool, Catalog::Semesters).await?;

    Ok(PublicSettings { settings, waves, subjects, semesters })
}
