pub(crate) mod admin;
pub(crate) mod announcements;
pub(crate) mod auth;
pub(crate) mod dashboard;
pub(crate) mod errors;
pub(crate) mod guards;
pub(crate) mod handlers;
pub(crate) mod pagination;
pub(crate) mod regions;
pub(crate) mod registrations;
pub(crate) mod router;
pub(crate) mod settings;
