use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{Transaction, TransactionRecord, TxSide};

pub async fn insert(
    pool: &PgPool,
    user_id: i64,
    investment_id: i64,
    side: TxSide,
    quantity: f64,
    price: f64,
    date: DateTime<Utc>,
) -> Result<Transaction, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "INSERT INTO transactions (user_id, investment_id, side, quantity, price, date)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, user_id, investment_id, side, quantity, price, date",
    )
    .bind(user_id)
    .bind(investment_id)
    .bind(side)
    .bind(quantity)
    .bind(price)
    .bind(date)
    .fetch_one(pool)
    .await
}

/// All of a user's transactions across every investment, for valuation.
pub async fn fetch_all_for_user(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "SELECT id, user_id, investment_id, side, quantity, price, date
         FROM transactions
         WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Listing query joined with the owning investment, newest first, optionally
/// narrowed to one investment.
pub async fn fetch_joined(
    pool: &PgPool,
    user_id: i64,
    investment_id: Option<i64>,
) -> Result<Vec<TransactionRecord>, sqlx::Error> {
    sqlx::query_as::<_, TransactionRecord>(
        "SELECT t.id, t.investment_id, i.name AS investment_name,
                i.symbol AS investment_symbol, t.side, t.quantity, t.price, t.date
         FROM transactions t
         JOIN investments i ON t.investment_id = i.id
         WHERE t.user_id = $1
           AND ($2::BIGINT IS NULL OR t.investment_id = $2)
         ORDER BY t.date DESC, t.id DESC",
    )
    .bind(user_id)
    .bind(investment_id)
    .fetch_all(pool)
    .await
}
