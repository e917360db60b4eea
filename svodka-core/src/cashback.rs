//! Category spending aggregation and cashback-benefit ranking.
//!
//! The benefit of a category is the extra cashback an increased rate
//! would have earned on that category's monthly spending, relative to
//! the standard rate.

use std::collections::HashMap;

use tracing::{error, info, warn};

use crate::{DateWindow, EmptyReason, Outcome, Transaction};

/// Standard and hypothetical increased cashback rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashbackRates {
    pub standard: f64,
    pub increased: f64,
}

impl Default for CashbackRates {
    fn default() -> Self {
        Self {
            standard: 0.01,
            increased: 0.05,
        }
    }
}

impl CashbackRates {
    pub fn differential(&self) -> f64 {
        self.increased - self.standard
    }
}

/// Sum of negated amounts per category.
///
/// Expenses are stored negative, so totals come out as positive
/// magnitudes; income rows subtract from their category's total.
/// Categories absent from the input never appear (no zero-filling).
pub fn expenses_by_category(txns: &[&Transaction]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for t in txns {
        *totals.entry(t.category.clone()).or_insert(0.0) += -t.amount;
    }
    totals
}

/// Benefit per category from switching to the increased rate.
pub fn category_benefits(
    totals: &HashMap<String, f64>,
    rates: CashbackRates,
) -> HashMap<String, f64> {
    totals
        .iter()
        .map(|(category, total)| (category.clone(), total * rates.differential()))
        .collect()
}

/// Rank categories by how much extra cashback the increased rate would
/// have earned in the given month, descending.
///
/// Never fails past this boundary: a bad period or an empty month comes
/// back as [`Outcome::Empty`] with the reason logged. The relative order
/// of equal-benefit categories is unspecified.
pub fn analyze_cashback_categories(
    txns: &[Transaction],
    year: i32,
    month: u32,
    rates: CashbackRates,
) -> Outcome<Vec<(String, f64)>> {
    let Some(window) = DateWindow::calendar_month(year, month) else {
        error!(year, month, "invalid reporting period");
        return Outcome::Empty(EmptyReason::InvalidPeriod { year, month });
    };

    let filtered = window.filter(txns);
    info!(
        count = filtered.len(),
        year, month, "filtered transactions for cashback analysis"
    );

    if filtered.is_empty() {
        warn!(year, month, "no transactions in the requested month");
        return Outcome::Empty(EmptyReason::NoTransactions { year, month });
    }

    let benefits = category_benefits(&expenses_by_category(&filtered), rates);
    let mut ranked: Vec<(String, f64)> = benefits.into_iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

    if let Some((top, benefit)) = ranked.first() {
        info!(category = %top, benefit, "cashback ranking complete");
    }
    Outcome::Data(ranked)
}
