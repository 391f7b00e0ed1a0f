use std::collections::HashMap;

use sqlx::PgPool;

use crate::db;
use crate::errors::AppError;
use crate::models::{InvestmentMetrics, PortfolioOverview, Transaction};
use crate::services::valuation;

/// Fetches one snapshot of the user's investments and transactions and runs
/// the valuation engine over it. Two queries total, grouped in memory, so the
/// whole request computes against a single consistent read.
pub async fn metrics_for_user(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<InvestmentMetrics>, AppError> {
    let investments = db::investment_queries::fetch_all(pool, user_id).await?;
    let transactions = db::transaction_queries::fetch_all_for_user(pool, user_id).await?;

    let mut by_investment: HashMap<i64, Vec<Transaction>> = HashMap::new();
    for tx in transactions {
        by_investment.entry(tx.investment_id).or_default().push(tx);
    }

    Ok(investments
        .iter()
        .map(|inv| {
            let txs = by_investment.get(&inv.id).map(Vec::as_slice).unwrap_or(&[]);
            valuation::position_metrics(inv, txs)
        })
        .collect())
}

pub async fn overview(pool: &PgPool, user_id: i64) -> Result<PortfolioOverview, AppError> {
    let metrics = metrics_for_user(pool, user_id).await?;
    Ok(valuation::portfolio_overview(metrics))
}
