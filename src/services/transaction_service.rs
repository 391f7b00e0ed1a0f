use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sqlx::PgPool;
use tracing::error;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreateTransaction, Transaction, TransactionRecord, TxSide};

pub async fn create(
    pool: &PgPool,
    user_id: i64,
    input: CreateTransaction,
) -> Result<Transaction, AppError> {
    let side = parse_side(&input.side)?;
    let date = parse_date(&input.date)?;

    // The referenced investment must belong to the caller.
    db::investment_queries::fetch_one(pool, user_id, input.investment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Investment not found".to_string()))?;

    match db::transaction_queries::insert(
        pool,
        user_id,
        input.investment_id,
        side,
        input.quantity,
        input.price,
        date,
    )
    .await
    {
        Ok(tx) => Ok(tx),
        Err(e) => {
            error!("Failed to record transaction for user {}: {:?}", user_id, e);
            Err(AppError::Db(e))
        }
    }
}

pub async fn list(
    pool: &PgPool,
    user_id: i64,
    investment_id: Option<i64>,
) -> Result<Vec<TransactionRecord>, AppError> {
    let records = db::transaction_queries::fetch_joined(pool, user_id, investment_id).await?;
    Ok(records)
}

// Exactly "BUY" or "SELL", case-sensitive.
fn parse_side(raw: &str) -> Result<TxSide, AppError> {
    match raw {
        "BUY" => Ok(TxSide::Buy),
        "SELL" => Ok(TxSide::Sell),
        _ => Err(AppError::Validation("type must be BUY or SELL".into())),
    }
}

// Accepts RFC 3339, a naive datetime, or a bare date taken as midnight UTC.
fn parse_date(raw: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Ok(naive.and_utc());
    }
    if let Ok(day) = raw.parse::<NaiveDate>() {
        return Ok(day.and_time(NaiveTime::MIN).and_utc());
    }
    Err(AppError::Validation("Invalid date format, use ISO 8601".into()))
}
