use sqlx::PgPool;
use tracing::error;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreateInvestment, Investment, UpdateInvestment};

pub async fn create(
    pool: &PgPool,
    user_id: i64,
    input: CreateInvestment,
) -> Result<Investment, AppError> {
    if input.kind.trim().is_empty() {
        return Err(AppError::Validation("Investment type cannot be empty".into()));
    }
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Investment name cannot be empty".into()));
    }
    if input.current_price < 0.0 {
        return Err(AppError::Validation("Current price cannot be negative".into()));
    }
    match db::investment_queries::insert(pool, user_id, input).await {
        Ok(investment) => Ok(investment),
        Err(e) => {
            error!("Failed to create investment for user {}: {:?}", user_id, e);
            Err(AppError::Db(e))
        }
    }
}

pub async fn update(
    pool: &PgPool,
    user_id: i64,
    id: i64,
    input: UpdateInvestment,
) -> Result<Investment, AppError> {
    if let Some(kind) = &input.kind {
        if kind.trim().is_empty() {
            return Err(AppError::Validation("Investment type cannot be empty".into()));
        }
    }
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Investment name cannot be empty".into()));
        }
    }
    if let Some(price) = input.current_price {
        if price < 0.0 {
            return Err(AppError::Validation("Current price cannot be negative".into()));
        }
    }
    db::investment_queries::update(pool, user_id, id, input)
        .await?
        .ok_or_else(|| AppError::NotFound("Investment not found".to_string()))
}

pub async fn delete(pool: &PgPool, user_id: i64, id: i64) -> Result<(), AppError> {
    match db::investment_queries::delete(pool, user_id, id).await {
        Ok(0) => Err(AppError::NotFound("Investment not found".to_string())),
        Ok(_) => Ok(()),
        Err(e) => Err(AppError::from(e)),
    }
}
