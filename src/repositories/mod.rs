pub(crate) mod announcements;
pub(crate) mod catalog;
pub(crate) mod health;
pub(crate) mod school_settings;
pub(crate) mod students;
pub(crate) mod users;
pub(crate) mod waves;
