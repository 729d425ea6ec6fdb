pub(crate) mod announcements;
pub(crate) mod cbt_export;
pub(crate) mod dashboard;
pub(crate) mod layout;
pub(crate) mod public_settings;
pub(crate) mod regions;
pub(crate) mod school_settings;
pub(crate) mod verification;
pub(crate) mod waves;
