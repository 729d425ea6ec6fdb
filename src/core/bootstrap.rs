use uuid::Uuid;

use crate::core::security;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::types::UserRole;
use crate::repositories::{
    self,
    users::{CreateUser, UpdateUser},
};

/// Makes sure the configured first admin exists, is active and can log in with the
/// configured password.
pub(crate) async fn ensure_superuser(state: &AppState) -> anyhow::Result<()> {
    let admin = state.settings().admin();
    let email = admin.first_superuser_email.trim().to_lowercase();
    if email.is_empty() || admin.first_superuser_password.is_empty() {
        tracing::warn!("FIRST_SUPERUSER_EMAIL/PASSWORD not configured; skipping superuser creation");
        return Ok(());
    }

    let now = primitive_now_utc();
    let existing = repositories::users::find_by_email(state.db(), &email).await?;

    let Some(user) = existing else {
        let hashed_password = security::hash_password(&admin.first_superuser_password)?;
        repositories::users::create(
            state.db(),
            CreateUser {
                id: &Uuid::new_v4().to_string(),
                email: &email,
                hashed_password,
                full_name: "Administrator",
                role: UserRole::Admin,
                is_active: true,
                created_at: now,
                updated_at: now,
            },
        )
        .await?;
        tracing::info!(email = %email, "Created default superuser");
        return Ok(());
    };

    let password_matches =
        security::verify_password(&admin.first_superuser_password, &user.hashed_password)
            .unwrap_or(false);
    let hashed_password = if password_matches {
        None
    } else {
        Some(security::hash_password(&admin.first_superuser_password)?)
    };
    let role = (user.role != UserRole::Admin).then_some(UserRole::Admin);
    let is_active = (!user.is_active).then_some(true);

    if hashed_password.is_none() && role.is_none() && is_active.is_none() {
        tracing::info!("Default superuser already up to date");
        return Ok(());
    }

    repositories::users::update(
        state.db(),
        &user.id,
        UpdateUser { hashed_password, role, is_active, updated_at: now },
    )
    .await?;
    tracing::info!(email = %email, "Updated default superuser");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_superuser;
    use crate::core::security;
    use crate::db::types::UserRole;
    use crate::repositories;
    use crate::test_support;

    #[tokio::test]
    #[ignore = "requires postgres"]
    async fn creates_then_repairs_the_configured_admin() {
        let guard = test_support::env_lock().await;
        test_support::set_test_env();
        std::env::set_var("FIRST_SUPERUSER_EMAIL", "Admin@Sekolah.sch.id");
        std::env::set_var("FIRST_SUPERUSER_PASSWORD", "kunci-admin-1");
        let settings = crate::core::config::Settings::load().expect("settings");
        std::env::remove_var("FIRST_SUPERUSER_EMAIL");
        std::env::remove_var("FIRST_SUPERUSER_PASSWORD");
        drop(guard);

        let ctx = test_support::setup_test_context().await;
        let state = crate::core::state::AppState::new(
            settings,
            ctx.state.db().clone(),
            ctx.state.redis().clone(),
        );

        ensure_superuser(&state).await.expect("bootstrap");
        let admin = repositories::users::find_by_email(state.db(), "admin@sekolah.sch.id")
            .await
            .unwrap()
            .expect("admin created");
        assert_eq!(admin.role, UserRole::Admin);
        assert!(security::verify_password("kunci-admin-1", &admin.hashed_password).unwrap());

        sqlx::query("UPDATE users SET role = 'STUDENT', is_active = FALSE WHERE id = $1")
            .bind(&admin.id)
            .execute(state.db())
            .await
            .unwrap();
        ensure_superuser(&state).await.expect("bootstrap again");

        let repaired = repositories::users::find_by_id(state.db(), &admin.id).await.unwrap().unwrap();
        assert_eq!(repaired.role, UserRole::Admin);
        assert!(repaired.is_active);
        assert_eq!(repaired.hashed_password, admin.hashed_password);
    }
}
