use sqlx::PgPool;
use tracing::info;

use crate::auth::{self, AuthKeys};
use crate::db;
use crate::errors::AppError;
use crate::models::{LoginRequest, MeResponse, RegisterRequest, TokenResponse, User};

pub async fn register(pool: &PgPool, input: RegisterRequest) -> Result<User, AppError> {
    if input.username.trim().is_empty() {
        return Err(AppError::Validation("Username cannot be empty".into()));
    }
    if input.password.is_empty() {
        return Err(AppError::Validation("Password cannot be empty".into()));
    }
    if db::user_queries::fetch_by_username(pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Username already exists".into()));
    }

    let password_hash = auth::hash_password(&input.password)?;
    let user = db::user_queries::insert(pool, &input.username, &password_hash).await?;
    info!("Registered user {} ({})", user.username, user.id);
    Ok(user)
}

/// Verifies credentials and issues an access token. A missing user and a bad
/// password produce the same error so usernames cannot be probed.
pub async fn login(
    pool: &PgPool,
    keys: &AuthKeys,
    input: LoginRequest,
) -> Result<TokenResponse, AppError> {
    let user = db::user_queries::fetch_by_username(pool, &input.username)
        .await?
        .ok_or(AppError::Unauthorized)?;
    if !auth::verify_password(&input.password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }
    let access_token = keys.issue(user.id, &user.username)?;
    Ok(TokenResponse { access_token })
}

pub async fn me(pool: &PgPool, user_id: i64) -> Result<MeResponse, AppError> {
    let user = db::user_queries::fetch_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(MeResponse {
        id: user.id,
        username: user.username,
    })
}

/// Creates the default admin account on first boot so a fresh deployment is
/// immediately usable.
pub async fn seed_admin(pool: &PgPool) -> Result<(), AppError> {
    if db::user_queries::fetch_by_username(pool, "admin")
        .await?
        .is_none()
    {
        let password_hash = auth::hash_password("admin123")?;
        db::user_queries::insert(pool, "admin", &password_hash).await?;
        info!("Seeded default admin user");
    }
    Ok(())
}
