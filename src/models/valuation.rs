use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An investment enriched with metrics derived from its transaction history.
/// Never persisted; recomputed from the ledger on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentMetrics {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub symbol: Option<String>,
    pub name: String,
    pub current_price: f64,
    pub quantity: f64,
    pub avg_purchase_price: f64,
    pub cost_basis: f64,
    pub current_value: f64,
    pub unrealized_pl: f64,
    pub pl_percent: f64,
}

/// Summed valuation figures for a group of investments (one category, or the
/// whole portfolio). `pl_percent` is always recomputed from the group's own
/// sums, never averaged from member percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub current_value: f64,
    pub cost_basis: f64,
    pub unrealized_pl: f64,
    pub pl_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioOverview {
    pub by_investment: Vec<InvestmentMetrics>,
    pub by_type: BTreeMap<String, GroupSummary>,
    pub totals: GroupSummary,
}
