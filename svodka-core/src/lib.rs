//! svodka-core: in-memory analytics over normalized bank transactions.
//!
//! Everything here is synchronous and deterministic: date-windowed
//! filtering, category aggregation, cashback ranking, the trailing
//! spending report and the dashboard payload. Reading statement files
//! and talking to market APIs live in the sibling crates.

pub mod cashback;
pub mod dashboard;
pub mod outcome;
pub mod spending;
pub mod transaction;
pub mod window;

pub use cashback::{
    CashbackRates, analyze_cashback_categories, category_benefits, expenses_by_category,
};
pub use dashboard::{
    CardSummary, CurrencyRate, Dashboard, StockPrice, TopTransaction, card_summaries, greeting,
    top_transactions,
};
pub use outcome::{EmptyReason, Outcome};
pub use spending::{SPENDING_WINDOW_DAYS, spending_by_category, spending_report};
pub use transaction::Transaction;
pub use window::DateWindow;
