use sqlx::PgPool;

use crate::models::{CreateInvestment, Investment, UpdateInvestment};

// Every statement filters by user_id; ownership is enforced here rather than
// in the handlers.

pub async fn insert(
    pool: &PgPool,
    user_id: i64,
    input: CreateInvestment,
) -> Result<Investment, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "INSERT INTO investments (user_id, kind, symbol, name, current_price)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, user_id, kind, symbol, name, current_price",
    )
    .bind(user_id)
    .bind(input.kind)
    .bind(input.symbol)
    .bind(input.name)
    .bind(input.current_price)
    .fetch_one(pool)
    .await
}

pub async fn fetch_all(pool: &PgPool, user_id: i64) -> Result<Vec<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "SELECT id, user_id, kind, symbol, name, current_price
         FROM investments
         WHERE user_id = $1
         ORDER BY id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(
    pool: &PgPool,
    user_id: i64,
    id: i64,
) -> Result<Option<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "SELECT id, user_id, kind, symbol, name, current_price
         FROM investments
         WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    user_id: i64,
    id: i64,
    input: UpdateInvestment,
) -> Result<Option<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "UPDATE investments
         SET kind = COALESCE($3, kind),
             symbol = COALESCE($4, symbol),
             name = COALESCE($5, name),
             current_price = COALESCE($6, current_price)
         WHERE id = $1 AND user_id = $2
         RETURNING id, user_id, kind, symbol, name, current_price",
    )
    .bind(id)
    .bind(user_id)
    .bind(input.kind)
    .bind(input.symbol)
    .bind(input.name)
    .bind(input.current_price)
    .fetch_optional(pool)
    .await
}

// Transactions go with it via ON DELETE CASCADE.
pub async fn delete(pool: &PgPool, user_id: i64, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM investments WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
