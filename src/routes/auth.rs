use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{LoginRequest, MeResponse, RegisterRequest, TokenResponse};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

pub async fn register(
    State(state): State<AppState>,
    Json(data): Json<RegisterRequest>,
) -> Result<Json<Value>, AppError> {
    info!("POST /api/auth/register - Registering user");
    services::auth_service::register(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to register user: {}", e);
            e
        })?;
    Ok(Json(json!({ "status": "ok" })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(data): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    info!("POST /api/auth/login - Logging in");
    let token = services::auth_service::login(&state.pool, &state.auth, data).await?;
    Ok(Json(token))
}

pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<MeResponse>, AppError> {
    info!("GET /api/auth/me - Fetching profile for user {}", user_id);
    let profile = services::auth_service::me(&state.pool, user_id).await?;
    Ok(Json(profile))
}
