//! svodka-market: network collaborators for the dashboard — currency
//! rates and stock quotes. Both degrade to an empty list on failure and
//! log the error instead of raising; the dashboard renders without them.

pub mod rates;
pub mod stocks;

pub use rates::fetch_currency_rates;
pub use stocks::fetch_stock_prices;
