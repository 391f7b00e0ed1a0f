use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A named holding the user tracks: stocks, bonds, funds and anything else.
// `current_price` is caller-supplied and may be stale; no price feed exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Investment {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub symbol: Option<String>,
    pub name: String,
    pub current_price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvestment {
    #[serde(rename = "type")]
    pub kind: String,
    pub symbol: Option<String>,
    pub name: String,
    pub current_price: f64,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInvestment {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub current_price: Option<f64>,
}
