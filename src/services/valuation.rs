//! Portfolio valuation engine.
//!
//! Pure functions over an investment's transaction ledger. Uses the
//! average-cost model: all buy lots blend into one average price, and sells
//! reduce the held quantity without touching that average. There is no
//! tax-lot (FIFO/LIFO) tracking, so cost basis is not reduced proportionally
//! to lots sold. Sells exceeding recorded buys produce a negative position,
//! which is propagated rather than rejected.

use std::collections::BTreeMap;

use crate::models::{
    GroupSummary, Investment, InvestmentMetrics, PortfolioOverview, Transaction, TxSide,
};

/// Derives position metrics for one investment from its transaction history.
///
/// The transaction slice must already be filtered to this investment and its
/// owner. Output is order-independent: only sums over the list are used.
pub fn position_metrics(inv: &Investment, txs: &[Transaction]) -> InvestmentMetrics {
    let mut buy_qty = 0.0;
    let mut buy_cost = 0.0;
    let mut sell_qty = 0.0;
    for tx in txs {
        match tx.side {
            TxSide::Buy => {
                buy_qty += tx.quantity;
                buy_cost += tx.quantity * tx.price;
            }
            TxSide::Sell => sell_qty += tx.quantity,
        }
    }

    let quantity = buy_qty - sell_qty;
    let avg_purchase_price = if buy_qty > 0.0 { buy_cost / buy_qty } else { 0.0 };
    let cost_basis = quantity * avg_purchase_price;
    let current_value = quantity * inv.current_price;
    let unrealized_pl = current_value - cost_basis;

    InvestmentMetrics {
        id: inv.id,
        kind: inv.kind.clone(),
        symbol: inv.symbol.clone(),
        name: inv.name.clone(),
        current_price: inv.current_price,
        quantity,
        avg_purchase_price,
        cost_basis,
        current_value,
        unrealized_pl,
        pl_percent: pl_percent(unrealized_pl, cost_basis),
    }
}

/// Folds per-investment metrics into per-category sums and a grand total.
///
/// Group and total `pl_percent` are recomputed from each group's summed
/// figures; averaging the members' percentages would weight every position
/// equally regardless of size.
pub fn portfolio_overview(by_investment: Vec<InvestmentMetrics>) -> PortfolioOverview {
    let mut by_type: BTreeMap<String, GroupSummary> = BTreeMap::new();
    let mut totals = GroupSummary::default();

    for row in &by_investment {
        let group = by_type.entry(row.kind.clone()).or_default();
        group.current_value += row.current_value;
        group.cost_basis += row.cost_basis;
        group.unrealized_pl += row.unrealized_pl;

        totals.current_value += row.current_value;
        totals.cost_basis += row.cost_basis;
        totals.unrealized_pl += row.unrealized_pl;
    }

    for group in by_type.values_mut() {
        group.pl_percent = pl_percent(group.unrealized_pl, group.cost_basis);
    }
    totals.pl_percent = pl_percent(totals.unrealized_pl, totals.cost_basis);

    PortfolioOverview {
        by_investment,
        by_type,
        totals,
    }
}

// Zero for zero or negative basis; no division is attempted.
fn pl_percent(unrealized_pl: f64, cost_basis: f64) -> f64 {
    if cost_basis > 0.0 {
        unrealized_pl / cost_basis * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn investment(kind: &str, current_price: f64) -> Investment {
        Investment {
            id: 1,
            user_id: 1,
            kind: kind.into(),
            symbol: Some("TST".into()),
            name: "Test Holding".into(),
            current_price,
        }
    }

    fn tx(side: TxSide, quantity: f64, price: f64) -> Transaction {
        Transaction {
            id: 0,
            user_id: 1,
            investment_id: 1,
            side,
            quantity,
            price,
            date: Utc::now(),
        }
    }

    fn metrics(kind: &str, cost_basis: f64, unrealized_pl: f64) -> InvestmentMetrics {
        InvestmentMetrics {
            id: 0,
            kind: kind.into(),
            symbol: None,
            name: "m".into(),
            current_price: 0.0,
            quantity: 0.0,
            avg_purchase_price: 0.0,
            cost_basis,
            current_value: cost_basis + unrealized_pl,
            unrealized_pl,
            pl_percent: 0.0,
        }
    }

    #[test]
    fn test_single_buy() {
        let inv = investment("stock", 100.0);
        let m = position_metrics(&inv, &[tx(TxSide::Buy, 10.0, 80.0)]);
        assert_eq!(m.quantity, 10.0);
        assert_eq!(m.avg_purchase_price, 80.0);
        assert_eq!(m.cost_basis, 800.0);
        assert_eq!(m.current_value, 1000.0);
        assert_eq!(m.unrealized_pl, 200.0);
        assert_eq!(m.pl_percent, 25.0);
    }

    #[test]
    fn test_sell_reduces_quantity_but_not_average() {
        let inv = investment("stock", 100.0);
        let m = position_metrics(
            &inv,
            &[tx(TxSide::Buy, 10.0, 80.0), tx(TxSide::Sell, 4.0, 90.0)],
        );
        assert_eq!(m.quantity, 6.0);
        assert_eq!(m.avg_purchase_price, 80.0, "sells must not move the buy average");
        assert_eq!(m.cost_basis, 480.0);
        assert_eq!(m.current_value, 600.0);
        assert_eq!(m.unrealized_pl, 120.0);
        assert_eq!(m.pl_percent, 25.0);
    }

    #[test]
    fn test_no_transactions_yields_all_zeros() {
        let inv = investment("bond", 50.0);
        let m = position_metrics(&inv, &[]);
        assert_eq!(m.quantity, 0.0);
        assert_eq!(m.avg_purchase_price, 0.0);
        assert_eq!(m.cost_basis, 0.0);
        assert_eq!(m.current_value, 0.0);
        assert_eq!(m.unrealized_pl, 0.0);
        assert_eq!(m.pl_percent, 0.0);
    }

    #[test]
    fn test_sells_without_buys_go_negative() {
        let inv = investment("stock", 10.0);
        let m = position_metrics(&inv, &[tx(TxSide::Sell, 3.0, 12.0)]);
        assert_eq!(m.quantity, -3.0);
        assert_eq!(m.avg_purchase_price, 0.0);
        assert_eq!(m.cost_basis, 0.0);
        assert_eq!(m.current_value, -30.0);
        assert_eq!(m.unrealized_pl, -30.0);
        assert_eq!(m.pl_percent, 0.0, "non-positive basis must not divide");
    }

    #[test]
    fn test_order_independence() {
        let inv = investment("stock", 95.0);
        let mut txs = vec![
            tx(TxSide::Buy, 5.0, 100.0),
            tx(TxSide::Sell, 2.0, 110.0),
            tx(TxSide::Buy, 3.0, 90.0),
            tx(TxSide::Sell, 1.0, 80.0),
        ];
        let forward = position_metrics(&inv, &txs);
        txs.reverse();
        let backward = position_metrics(&inv, &txs);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_blended_average_across_buys() {
        let inv = investment("stock", 20.0);
        let m = position_metrics(
            &inv,
            &[tx(TxSide::Buy, 10.0, 10.0), tx(TxSide::Buy, 10.0, 30.0)],
        );
        assert_eq!(m.avg_purchase_price, 20.0);
        assert_eq!(m.cost_basis, 400.0);
    }

    #[test]
    fn test_group_percent_from_sums_not_average_of_percents() {
        // 25% and -25% individually, but the group is (200-50)/1000 = 15%.
        let rows = vec![metrics("stock", 800.0, 200.0), metrics("stock", 200.0, -50.0)];
        let overview = portfolio_overview(rows);
        let group = &overview.by_type["stock"];
        assert_eq!(group.cost_basis, 1000.0);
        assert_eq!(group.unrealized_pl, 150.0);
        assert_eq!(group.pl_percent, 15.0);
        assert_eq!(overview.totals.pl_percent, 15.0);
    }

    #[test]
    fn test_totals_are_sum_of_groups() {
        let rows = vec![
            metrics("stock", 800.0, 200.0),
            metrics("bond", 500.0, 25.0),
            metrics("stock", 200.0, -50.0),
            metrics("crypto", 100.0, 40.0),
        ];
        let overview = portfolio_overview(rows);
        let (mut cv, mut cb, mut pl) = (0.0, 0.0, 0.0);
        for group in overview.by_type.values() {
            cv += group.current_value;
            cb += group.cost_basis;
            pl += group.unrealized_pl;
        }
        assert_eq!(overview.totals.current_value, cv);
        assert_eq!(overview.totals.cost_basis, cb);
        assert_eq!(overview.totals.unrealized_pl, pl);
    }

    #[test]
    fn test_overview_passes_rows_through_unchanged() {
        let rows = vec![metrics("stock", 800.0, 200.0), metrics("bond", 500.0, 25.0)];
        let overview = portfolio_overview(rows.clone());
        assert_eq!(overview.by_investment, rows);
    }

    #[test]
    fn test_empty_portfolio() {
        let overview = portfolio_overview(Vec::new());
        assert!(overview.by_investment.is_empty());
        assert!(overview.by_type.is_empty());
        assert_eq!(overview.totals, GroupSummary::default());
    }

    #[test]
    fn test_group_with_negative_basis_has_zero_percent() {
        let rows = vec![metrics("stock", -100.0, 30.0)];
        let overview = portfolio_overview(rows);
        assert_eq!(overview.by_type["stock"].pl_percent, 0.0);
        assert_eq!(overview.totals.pl_percent, 0.0);
    }
}
