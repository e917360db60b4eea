//! Typed empty-result surface for the analytic boundary.
//!
//! Report functions never fail past their boundary. Anything that would
//! have aborted surfaces as [`Outcome::Empty`] with the reason attached;
//! callers that only want rows collapse it with [`Outcome::into_rows`]
//! and keep the old always-continue behavior.

use thiserror::Error;

/// Why an analytic call produced no rows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmptyReason {
    /// The requested month contained no parseable transactions.
    #[error("no transactions in {year}-{month:02}")]
    NoTransactions { year: i32, month: u32 },

    /// The year/month pair does not name a real calendar month.
    #[error("{year}-{month:02} is not a valid reporting period")]
    InvalidPeriod { year: i32, month: u32 },

    /// The reference date string was not `YYYY-MM-DD`.
    #[error("reference date '{0}' is not YYYY-MM-DD")]
    BadReferenceDate(String),

    /// The window held transactions, just none matching the category.
    #[error("no expenses in category '{category}' within the window")]
    NoMatches { category: String },
}

/// Result of an analytic call that must never abort the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Data(T),
    Empty(EmptyReason),
}

impl<T> Outcome<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty(_))
    }

    /// The reason this outcome is empty, if it is.
    pub fn reason(&self) -> Option<&EmptyReason> {
        match self {
            Outcome::Empty(reason) => Some(reason),
            Outcome::Data(_) => None,
        }
    }
}

impl<T: Default> Outcome<T> {
    /// Collapse to plain rows, mapping `Empty` to the empty collection.
    pub fn into_rows(self) -> T {
        match self {
            Outcome::Data(rows) => rows,
            Outcome::Empty(_) => T::default(),
        }
    }
}
