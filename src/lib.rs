pub(crate) mod api;
pub(crate) mod core;
pub(crate) mod db;
pub(crate) mod repositories;
pub(crate) mod schemas;
pub(crate) mod services;

#[cfg(test)]
mod test_support;

use anyhow::{bail, Context};

use crate::core::{config::Settings, redis::RedisHandle, state::AppState, telemetry};
use crate::db::types::UserRole;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let db_pool = db::init_pool(&settings).await?;
    db::run_migrations(&db_pool).await?;

    let redis = RedisHandle::new(settings.redis().redis_url());
    if let Err(err) = redis.connect().await {
        tracing::error!(error = %err, "Failed to connect to Redis; login rate limiting disabled");
    } else {
        tracing::info!("Redis connected successfully");
    }

    let state = AppState::new(settings, db_pool.clone(), redis.clone());

    if let Err(err) = core::bootstrap::ensure_superuser(&state).await {
        tracing::error!(error = %err, "Failed to ensure default superuser");
    }
    let app = api::router::router(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        host = %state.settings().server_host(),
        port = state.settings().server_port(),
        environment = %state.settings().runtime().environment.as_str(),
        settings_ttl_seconds = state.settings().cache().settings_ttl_seconds,
        "PPDB portal listening"
    );

    let result =
        axum::serve(listener, app).with_graceful_shutdown(core::shutdown::shutdown_signal()).await;

    redis.disconnect().await;
    db_pool.close().await;
    tracing::info!("Connections closed");

    result?;

    Ok(())
}

/// Connectivity probe: counts users, reports the server version and lists a few accounts.
pub async fn run_db_check() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_script_tracing(&settings);

    let pool = db::init_script_pool(&settings).await.context("Failed to connect to database")?;

    let report = async {
        let users = repositories::users::count(&pool).await?;
        let version = repositories::health::server_version(&pool).await?;
        let sample = repositories::users::sample(&pool, 5).await?;
        Ok::<_, sqlx::Error>((users, version, sample))
    }
    .await;
    pool.close().await;

    let (users, version, sample) = report.context("Database check failed")?;
    println!("Database connection OK");
    println!("Server version: {version}");
    println!("Users: {users}");
    for user in sample {
        println!("  {} <{}> {:?}", user.full_name, user.email, user.role);
    }

    Ok(())
}

/// Grants the admin role to the account registered under `email`.
pub async fn promote_admin(email: &str) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let email = email.trim();
    if email.is_empty() {
        bail!("Email must not be empty");
    }

    let settings = Settings::load()?;
    telemetry::init_script_tracing(&settings);

    let pool = db::init_script_pool(&settings).await.context("Failed to connect to database")?;
    let updated = repositories::users::set_role_by_email(
        &pool,
        email,
        UserRole::Admin,
        core::time::primitive_now_utc(),
    )
    .await;
    pool.close().await;

    match updated.context("Failed to update user role")? {
        Some(user) => {
            tracing::info!(user_id = %user.id, "User promoted to admin");
            println!("{} ({}) is now an admin", user.email, user.full_name);
            Ok(())
        }
        None => bail!("No user registered with email {email}"),
    }
}
