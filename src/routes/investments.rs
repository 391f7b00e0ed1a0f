use axum::extract::{Path, State};
use axum::routing::{delete, post, put};
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{Created, CreateInvestment, InvestmentMetrics, UpdateInvestment};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_investment).get(list_investments))
        .route("/:id", put(update_investment))
        .route("/:id", delete(delete_investment))
}

pub async fn create_investment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(data): Json<CreateInvestment>,
) -> Result<Json<Created>, AppError> {
    info!("POST /api/investments - Creating investment for user {}", user_id);
    let investment = services::investment_service::create(&state.pool, user_id, data)
        .await
        .map_err(|e| {
            error!("Failed to create investment: {}", e);
            e
        })?;
    Ok(Json(Created { id: investment.id }))
}

/// Lists the user's investments enriched with valuation metrics.
pub async fn list_investments(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<InvestmentMetrics>>, AppError> {
    info!("GET /api/investments - Listing investments for user {}", user_id);
    let metrics = services::portfolio_service::metrics_for_user(&state.pool, user_id)
        .await
        .map_err(|e| {
            error!("Failed to list investments for user {}: {}", user_id, e);
            e
        })?;
    Ok(Json(metrics))
}

pub async fn update_investment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateInvestment>,
) -> Result<Json<serde_json::Value>, AppError> {
    info!("PUT /api/investments/{} - Updating investment", id);
    services::investment_service::update(&state.pool, user_id, id, data)
        .await
        .map_err(|e| {
            error!("Failed to update investment {}: {}", id, e);
            e
        })?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}

pub async fn delete_investment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    info!("DELETE /api/investments/{} - Deleting investment", id);
    services::investment_service::delete(&state.pool, user_id, id)
        .await
        .map_err(|e| {
            error!("Failed to delete investment {}: {}", id, e);
            e
        })?;
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
