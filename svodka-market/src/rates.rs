//! Currency exchange rates against RUB.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use svodka_core::CurrencyRate;
use tracing::error;

const RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/RUB";
pub const RATES_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// Keep only the requested codes, in request order. Codes the provider
/// does not quote are dropped without comment.
fn select_rates(all: &HashMap<String, f64>, currencies: &[String]) -> Vec<CurrencyRate> {
    currencies
        .iter()
        .filter_map(|currency| {
            all.get(currency).map(|&rate| CurrencyRate {
                currency: currency.clone(),
                rate,
            })
        })
        .collect()
}

/// Fetch rates for the requested currency codes. Any request or decode
/// failure yields an empty list with the error logged.
pub async fn fetch_currency_rates(
    client: &reqwest::Client,
    currencies: &[String],
) -> Vec<CurrencyRate> {
    match request_rates(client).await {
        Ok(response) => select_rates(&response.rates, currencies),
        Err(err) => {
            error!(%err, "currency rate lookup failed");
            Vec::new()
        }
    }
}

async fn request_rates(client: &reqwest::Client) -> Result<RatesResponse> {
    client
        .get(RATES_URL)
        .timeout(RATES_TIMEOUT)
        .send()
        .await
        .context("requesting currency rates")?
        .error_for_status()
        .context("currency rate endpoint returned an error")?
        .json::<RatesResponse>()
        .await
        .context("decoding currency rates")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "base": "RUB",
        "date": "2018-04-02",
        "rates": {"USD": 0.0162, "EUR": 0.0131, "RUB": 1.0}
    }"#;

    #[test]
    fn test_response_decodes_and_selects_in_request_order() {
        let response: RatesResponse = serde_json::from_str(BODY).unwrap();
        let wanted = vec!["EUR".to_string(), "USD".to_string()];
        let rates = select_rates(&response.rates, &wanted);

        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].currency, "EUR");
        assert_eq!(rates[0].rate, 0.0131);
        assert_eq!(rates[1].currency, "USD");
    }

    #[test]
    fn test_unknown_codes_are_dropped() {
        let response: RatesResponse = serde_json::from_str(BODY).unwrap();
        let wanted = vec!["USD".to_string(), "XXX".to_string()];
        let rates = select_rates(&response.rates, &wanted);
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].currency, "USD");
    }
}
