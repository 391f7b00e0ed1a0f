use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{Created, CreateTransaction, TransactionRecord};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_transaction).get(list_transactions))
}

#[derive(Debug, Deserialize)]
pub struct TransactionFilter {
    pub investment_id: Option<i64>,
}

pub async fn create_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(data): Json<CreateTransaction>,
) -> Result<Json<Created>, AppError> {
    info!("POST /api/transactions - Recording transaction for user {}", user_id);
    let tx = services::transaction_service::create(&state.pool, user_id, data)
        .await
        .map_err(|e| {
            error!("Failed to record transaction: {}", e);
            e
        })?;
    Ok(Json(Created { id: tx.id }))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(filter): Query<TransactionFilter>,
) -> Result<Json<Vec<TransactionRecord>>, AppError> {
    info!("GET /api/transactions - Listing transactions for user {}", user_id);
    let records =
        services::transaction_service::list(&state.pool, user_id, filter.investment_id)
            .await
            .map_err(|e| {
                error!("Failed to list transactions for user {}: {}", user_id, e);
                e
            })?;
    Ok(Json(records))
}
