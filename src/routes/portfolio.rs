use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::PortfolioOverview;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/overview", get(overview))
}

/// Whole-portfolio valuation: per-investment rows, per-type sums, and totals.
pub async fn overview(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PortfolioOverview>, AppError> {
    info!("GET /api/portfolio/overview - Computing overview for user {}", user_id);
    let overview = services::portfolio_service::overview(&state.pool, user_id)
        .await
        .map_err(|e| {
            error!("Failed to compute overview for user {}: {}", user_id, e);
            e
        })?;
    Ok(Json(overview))
}
