use serde::Serialize;

use crate::core::config::PortalSettings;
use crate::core::state::AppState;
use crate::db::models::SchoolSettings;

/// School branding shown around every admin page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct AdminShell {
    pub(crate) school_name: String,
    pub(crate) logo_url: String,
}

impl AdminShell {
    pub(crate) fn from_settings(settings: Option<&SchoolSettings>, portal: &PortalSettings) -> Self {
        let school_name = settings
            .map(|row| row.school_name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(&portal.fallback_school_name)
            .to_string();
        let logo_url = settings
            .and_then(|row| row.logo_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(&portal.fallback_logo_url)
            .to_string();

        Self { school_name, logo_url }
    }
}

/// Loads the shell through the settings cache. Query errors propagate to the caller.
pub(crate) async fn admin_shell(state: &AppState) -> Result<AdminShell, sqlx::Error> {
    let settings = state.school_settings().get(state.db()).await?;
    Ok(AdminShell::from_settings(settings.as_ref(), state.settings().portal()))
}
