use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "tx_side", rename_all = "UPPERCASE")]
pub enum TxSide {
    Buy,
    Sell,
}

// A buy or sell event against an investment. Append-only: rows are never
// updated, and are removed only by cascading deletion of the investment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub investment_id: i64,
    #[serde(rename = "type")]
    pub side: TxSide,
    pub quantity: f64,
    pub price: f64,
    pub date: DateTime<Utc>,
}

/// Wire payload for recording a transaction. `side` and `date` arrive as raw
/// strings and are validated in the service layer so that malformed values
/// surface as 400s with a useful message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransaction {
    pub investment_id: i64,
    #[serde(rename = "type")]
    pub side: String,
    pub quantity: f64,
    pub price: f64,
    pub date: String,
}

/// Transaction listing row, joined with the owning investment's name and
/// symbol for display.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TransactionRecord {
    pub id: i64,
    pub investment_id: i64,
    pub investment_name: String,
    pub investment_symbol: Option<String>,
    #[serde(rename = "type")]
    pub side: TxSide,
    pub quantity: f64,
    pub price: f64,
    pub date: DateTime<Utc>,
}
