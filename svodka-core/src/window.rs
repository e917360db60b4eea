//! Inclusive calendar windows used by every report.

use chrono::{Datelike, Duration, NaiveDate};

use crate::Transaction;

/// An inclusive `[start, end]` range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// A whole calendar month. The end is the first day of the next
    /// month minus one day; December wraps to January of the next year.
    /// `None` when `year`/`month` does not name a real month.
    pub fn calendar_month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)? - Duration::days(1);
        Some(Self { start, end })
    }

    /// A trailing window ending at `end`, extending `days` days back.
    pub fn trailing_days(end: NaiveDate, days: i64) -> Self {
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    /// First day of `closing`'s month through `closing` itself.
    pub fn month_to_date(closing: NaiveDate) -> Self {
        Self {
            start: closing.with_day(1).unwrap(),
            end: closing,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Transactions whose operation date falls inside the window.
    pub fn filter<'a>(&self, txns: &'a [Transaction]) -> Vec<&'a Transaction> {
        txns.iter()
            .filter(|t| self.contains(t.operation_date))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_month_bounds() {
        let april = DateWindow::calendar_month(2025, 4).unwrap();
        assert_eq!(april.start, date(2025, 4, 1));
        assert_eq!(april.end, date(2025, 4, 30));

        // Leap February
        let feb = DateWindow::calendar_month(2024, 2).unwrap();
        assert_eq!(feb.end, date(2024, 2, 29));
    }

    #[test]
    fn test_december_wraps_to_january() {
        let dec = DateWindow::calendar_month(2025, 12).unwrap();
        assert_eq!(dec.start, date(2025, 12, 1));
        assert_eq!(dec.end, date(2025, 12, 31));
    }

    #[test]
    fn test_invalid_month_is_none() {
        assert_eq!(DateWindow::calendar_month(2025, 13), None);
        assert_eq!(DateWindow::calendar_month(2025, 0), None);
    }

    #[test]
    fn test_trailing_days_inclusive_on_both_ends() {
        let w = DateWindow::trailing_days(date(2025, 4, 2), 90);
        assert_eq!(w.start, date(2025, 1, 2));
        assert!(w.contains(date(2025, 1, 2)));
        assert!(w.contains(date(2025, 4, 2)));
        assert!(!w.contains(date(2025, 1, 1)));
        assert!(!w.contains(date(2025, 4, 3)));
    }

    #[test]
    fn test_month_to_date() {
        let w = DateWindow::month_to_date(date(2025, 4, 15));
        assert_eq!(w.start, date(2025, 4, 1));
        assert_eq!(w.end, date(2025, 4, 15));
    }

    #[test]
    fn test_filter_by_operation_date() {
        let txns = vec![
            Transaction::new(date(2025, 4, 1), -100.0, "Еда"),
            Transaction::new(date(2025, 5, 1), -200.0, "Еда"),
        ];
        let april = DateWindow::calendar_month(2025, 4).unwrap();
        let kept = april.filter(&txns);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].amount, -100.0);
    }
}
