//! Normalized bank transaction record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bank operation, validated at ingestion.
///
/// The amount sign is authoritative: negative = expense, positive =
/// income. No separate transaction-type field is trusted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Date the operation was made.
    pub operation_date: NaiveDate,
    /// Date the payment settled; `None` on pending or failed rows.
    pub payment_date: Option<NaiveDate>,
    /// Signed payment amount.
    pub amount: f64,
    pub category: String,
    /// Bank status label, "OK" for settled operations.
    pub status: String,
    /// Masked card number; `None` when the source row had none.
    pub card: Option<String>,
    pub description: String,
}

impl Transaction {
    /// Create a settled transaction with the bare minimum of fields.
    pub fn new(operation_date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self {
            operation_date,
            payment_date: None,
            amount,
            category: category.into(),
            status: "OK".to_string(),
            card: None,
            description: String::new(),
        }
    }

    pub fn with_payment_date(mut self, date: NaiveDate) -> Self {
        self.payment_date = Some(date);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_card(mut self, card: impl Into<String>) -> Self {
        self.card = Some(card.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }

    /// Last four characters of the card number, if one is present.
    ///
    /// Distinct physical cards sharing the same tail are conflated by
    /// the source data contract.
    pub fn last_digits(&self) -> Option<String> {
        self.card.as_deref().map(|card| {
            let card = card.trim();
            let skip = card.chars().count().saturating_sub(4);
            card.chars().skip(skip).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sign_classification() {
        let expense = Transaction::new(date(2025, 4, 1), -100.0, "Еда");
        let income = Transaction::new(date(2025, 4, 1), 5000.0, "Зарплата");
        assert!(expense.is_expense());
        assert!(!expense.is_income());
        assert!(income.is_income());
        assert_eq!(expense.abs_amount(), 100.0);
    }

    #[test]
    fn test_last_digits() {
        let txn = Transaction::new(date(2025, 4, 1), -100.0, "Еда").with_card("*7197");
        assert_eq!(txn.last_digits(), Some("7197".to_string()));

        let short = Transaction::new(date(2025, 4, 1), -100.0, "Еда").with_card("42");
        assert_eq!(short.last_digits(), Some("42".to_string()));

        let none = Transaction::new(date(2025, 4, 1), -100.0, "Еда");
        assert_eq!(none.last_digits(), None);
    }
}
