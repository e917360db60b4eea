//! Trailing-90-day spending report for one category.

use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

use crate::{DateWindow, EmptyReason, Outcome, Transaction};

/// Reporting window length for spending reports.
pub const SPENDING_WINDOW_DAYS: i64 = 90;

/// Expense rows in `category` whose operation date lies within the
/// trailing 90 days ending at `end`, inclusive on both ends.
pub fn spending_by_category(
    txns: &[Transaction],
    category: &str,
    end: NaiveDate,
) -> Vec<Transaction> {
    let window = DateWindow::trailing_days(end, SPENDING_WINDOW_DAYS);
    txns.iter()
        .filter(|t| t.category == category && t.is_expense() && window.contains(t.operation_date))
        .cloned()
        .collect()
}

/// Report entry point over an optional `YYYY-MM-DD` reference date,
/// defaulting to today. A bad date string surfaces as an empty report
/// with the reason attached, never as an error.
pub fn spending_report(
    txns: &[Transaction],
    category: &str,
    date: Option<&str>,
) -> Outcome<Vec<Transaction>> {
    let end = match date {
        None => Local::now().date_naive(),
        Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => d,
            Err(err) => {
                error!(date = s, %err, "bad reference date for spending report");
                return Outcome::Empty(EmptyReason::BadReferenceDate(s.to_string()));
            }
        },
    };

    let rows = spending_by_category(txns, category, end);
    info!(
        category,
        rows = rows.len(),
        end = %end,
        "spending report built"
    );

    if rows.is_empty() {
        warn!(category, "no expenses in category within the window");
        return Outcome::Empty(EmptyReason::NoMatches {
            category: category.to_string(),
        });
    }
    Outcome::Data(rows)
}
