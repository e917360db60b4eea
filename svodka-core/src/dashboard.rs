//! Dashboard payload: greeting, per-card summaries, top transactions,
//! plus market snapshots fetched by the caller.
//!
//! Both card summaries and top transactions look at the payment date
//! (not the operation date) over the first-of-month..closing window, and
//! only at rows the bank settled with status "OK".

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{DateWindow, Transaction};

/// Fixed cashback accrual on card spending.
const CARD_CASHBACK_RATE: f64 = 0.01;
/// How many transactions the dashboard highlights.
const TOP_TRANSACTION_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardSummary {
    pub last_digits: String,
    pub total_spent: f64,
    pub cashback: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopTransaction {
    /// Payment date, formatted `DD.MM.YYYY` like the source export.
    pub date: String,
    /// Signed original amount.
    pub amount: f64,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyRate {
    pub currency: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockPrice {
    pub stock: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    pub greeting: String,
    pub cards: Vec<CardSummary>,
    pub top_transactions: Vec<TopTransaction>,
    pub currency_rates: Vec<CurrencyRate>,
    pub stock_prices: Vec<StockPrice>,
}

/// Greeting for the hour of day: morning [4,12), day [12,18),
/// evening [18,21), night otherwise.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        4..=11 => "Доброе утро",
        12..=17 => "Добрый день",
        18..=20 => "Добрый вечер",
        _ => "Доброй ночи",
    }
}

/// Rows that count for the dashboard: settled ("OK") with a payment
/// date inside the window.
fn settled_in_window<'a>(
    txns: &'a [Transaction],
    window: DateWindow,
) -> impl Iterator<Item = &'a Transaction> {
    txns.iter()
        .filter(move |t| t.status == "OK" && t.payment_date.is_some_and(|d| window.contains(d)))
}

/// Per-card spending and 1% cashback for the closing month.
///
/// Keyed by the card number's last four digits; rows without a card
/// number are skipped entirely. Output order is unspecified.
pub fn card_summaries(txns: &[Transaction], closing: NaiveDate) -> Vec<CardSummary> {
    let window = DateWindow::month_to_date(closing);
    let mut cards: HashMap<String, (f64, f64)> = HashMap::new();

    for t in settled_in_window(txns, window) {
        if !t.is_expense() {
            continue; // income is not spending
        }
        let Some(digits) = t.last_digits() else {
            continue;
        };
        let entry = cards.entry(digits).or_insert((0.0, 0.0));
        entry.0 += t.abs_amount();
        entry.1 += t.abs_amount() * CARD_CASHBACK_RATE;
    }

    cards
        .into_iter()
        .map(|(last_digits, (total_spent, cashback))| CardSummary {
            last_digits,
            total_spent,
            cashback,
        })
        .collect()
}

/// The five largest settled transactions of the closing month by
/// absolute amount, either sign. Equal amounts may come back in either
/// relative order.
pub fn top_transactions(txns: &[Transaction], closing: NaiveDate) -> Vec<TopTransaction> {
    let window = DateWindow::month_to_date(closing);
    let mut rows: Vec<&Transaction> = settled_in_window(txns, window).collect();
    rows.sort_by(|a, b| b.abs_amount().partial_cmp(&a.abs_amount()).unwrap());
    rows.truncate(TOP_TRANSACTION_COUNT);

    rows.into_iter()
        .map(|t| TopTransaction {
            date: t
                .payment_date
                .map(|d| d.format("%d.%m.%Y").to_string())
                .unwrap_or_default(),
            amount: t.amount,
            category: t.category.clone(),
            description: t.description.clone(),
        })
        .collect()
}

/// Assemble the full dashboard payload for the instant `at`. Market
/// data arrives pre-fetched so the assembly itself stays pure.
pub fn assemble(
    txns: &[Transaction],
    at: NaiveDateTime,
    currency_rates: Vec<CurrencyRate>,
    stock_prices: Vec<StockPrice>,
) -> Dashboard {
    let closing = at.date();
    Dashboard {
        greeting: greeting(at.hour()).to_string(),
        cards: card_summaries(txns, closing),
        top_transactions: top_transactions(txns, closing),
        currency_rates,
        stock_prices,
    }
}
