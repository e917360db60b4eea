//! Stock quotes from Alpha Vantage, one GLOBAL_QUOTE call per symbol.

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;
use svodka_core::StockPrice;
use tracing::{error, warn};

const QUOTE_URL: &str = "https://www.alphavantage.co/query";
pub const QUOTE_TIMEOUT: Duration = Duration::from_secs(30);

/// Extract `"Global Quote"."05. price"` from a quote response. The
/// provider sends the price as a decimal string.
fn quote_price(body: &Value) -> Option<f64> {
    match body.get("Global Quote")?.get("05. price")? {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Quote each symbol in turn. A symbol without a quote (bad ticker,
/// throttled) is skipped; a transport failure abandons the remainder
/// and returns an empty list.
pub async fn fetch_stock_prices(
    client: &reqwest::Client,
    api_key: &str,
    symbols: &[String],
) -> Vec<StockPrice> {
    match request_quotes(client, api_key, symbols).await {
        Ok(prices) => prices,
        Err(err) => {
            error!(%err, "stock price lookup failed");
            Vec::new()
        }
    }
}

async fn request_quotes(
    client: &reqwest::Client,
    api_key: &str,
    symbols: &[String],
) -> Result<Vec<StockPrice>> {
    let mut prices = Vec::new();

    for symbol in symbols {
        let body: Value = client
            .get(QUOTE_URL)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol.as_str()),
                ("apikey", api_key),
            ])
            .timeout(QUOTE_TIMEOUT)
            .send()
            .await
            .with_context(|| format!("requesting quote for {symbol}"))?
            .error_for_status()
            .with_context(|| format!("quote endpoint rejected {symbol}"))?
            .json()
            .await
            .with_context(|| format!("decoding quote for {symbol}"))?;

        match quote_price(&body) {
            Some(price) => prices.push(StockPrice {
                stock: symbol.clone(),
                price,
            }),
            None => warn!(symbol = %symbol, "no quote in response, skipping"),
        }
    }

    Ok(prices)
}
