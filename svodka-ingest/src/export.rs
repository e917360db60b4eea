//! Write a spending report to CSV, preserving the bank's column labels.
//!
//! Persistence is explicit composition: the caller builds the report
//! first, then hands the rows here. The rows themselves are never
//! altered by saving.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use svodka_core::Transaction;
use tracing::{error, info};

/// Output row, labeled exactly like the source export.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "Дата операции")]
    operation_date: String,
    #[serde(rename = "Дата платежа")]
    payment_date: String,
    #[serde(rename = "Сумма платежа")]
    amount: f64,
    #[serde(rename = "Категория")]
    category: &'a str,
    #[serde(rename = "Статус")]
    status: &'a str,
    #[serde(rename = "Номер карты")]
    card: &'a str,
    #[serde(rename = "Описание")]
    description: &'a str,
}

impl<'a> From<&'a Transaction> for ReportRow<'a> {
    fn from(t: &'a Transaction) -> Self {
        Self {
            operation_date: t.operation_date.format("%Y-%m-%d").to_string(),
            payment_date: t
                .payment_date
                .map(|d| d.format("%d.%m.%Y").to_string())
                .unwrap_or_default(),
            amount: t.amount,
            category: &t.category,
            status: &t.status,
            card: t.card.as_deref().unwrap_or(""),
            description: &t.description,
        }
    }
}

/// Default report name: `report_<YYYYMMDD_HHMMSS>.csv` in the working
/// directory.
pub fn default_report_path() -> PathBuf {
    PathBuf::from(format!(
        "report_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Persist report rows, returning the path written. Success and failure
/// are both logged; the caller decides whether a failed save matters.
pub fn save_report(rows: &[Transaction], path: Option<&Path>) -> Result<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_report_path);

    match write_rows(rows, &path) {
        Ok(()) => {
            info!(path = %path.display(), rows = rows.len(), "report saved");
            Ok(path)
        }
        Err(err) => {
            error!(path = %path.display(), %err, "failed to save report");
            Err(err)
        }
    }
}

fn write_rows(rows: &[Transaction], path: &Path) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for t in rows {
        wtr.serialize(ReportRow::from(t))?;
    }
    wtr.flush().context("flushing report")?;
    Ok(())
}
