//! Parse the bank's operations CSV export into typed transactions.
//!
//! Column labels are contractual and must match the export byte for
//! byte: Дата операции, Дата платежа, Сумма платежа, Категория, Статус,
//! Номер карты, Описание. Operation dates arrive as either `YYYY-MM-DD`
//! or `DD.MM.YYYY` depending on which tool produced the file.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use svodka_core::Transaction;
use tracing::warn;

/// One raw CSV row, keyed by the bank's column labels.
#[derive(Debug, Deserialize)]
struct RawOperation {
    #[serde(rename = "Дата операции")]
    operation_date: String,
    #[serde(rename = "Дата платежа", default)]
    payment_date: String,
    #[serde(rename = "Сумма платежа")]
    amount: f64,
    #[serde(rename = "Категория", default)]
    category: String,
    #[serde(rename = "Статус", default)]
    status: String,
    #[serde(rename = "Номер карты", default)]
    card: String,
    #[serde(rename = "Описание", default)]
    description: String,
}

fn parse_operation_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d.%m.%Y"))
        .ok()
}

/// Best-effort row normalization. Rows without a parseable operation
/// date are dropped; a bad payment date or a missing/"nan" card number
/// only clears that field.
fn normalize(raw: RawOperation) -> Option<Transaction> {
    let Some(operation_date) = parse_operation_date(&raw.operation_date) else {
        warn!(
            date = %raw.operation_date,
            "skipping row with unparseable operation date"
        );
        return None;
    };

    let payment_date = NaiveDate::parse_from_str(raw.payment_date.trim(), "%d.%m.%Y").ok();

    let card = raw.card.trim();
    let card = (!card.is_empty() && card != "nan").then(|| card.to_string());

    Some(Transaction {
        operation_date,
        payment_date,
        amount: raw.amount,
        category: raw.category,
        status: raw.status,
        card,
        description: raw.description,
    })
}

/// Read operations from any CSV source. Malformed rows are skipped with
/// a log line rather than failing the whole file.
pub fn read_operations<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut txns = Vec::new();

    for row in rdr.deserialize::<RawOperation>() {
        match row {
            Ok(raw) => {
                if let Some(t) = normalize(raw) {
                    txns.push(t);
                }
            }
            Err(err) => warn!(%err, "skipping malformed CSV row"),
        }
    }

    Ok(txns)
}

/// Read an operations CSV file from disk.
pub fn read_operations_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    read_operations(file)
}
