//! User dashboard settings, loaded from a JSON file and passed
//! explicitly to the dashboard subcommand. Nothing is read at startup.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Contents of `user_settings.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSettings {
    pub user_currencies: Vec<String>,
    pub user_stocks: Vec<String>,
}

pub fn load_settings(path: &Path) -> Result<UserSettings> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_shape() {
        let settings: UserSettings = serde_json::from_str(
            r#"{"user_currencies": ["USD", "EUR"], "user_stocks": ["AAPL", "AMZN"]}"#,
        )
        .unwrap();
        assert_eq!(settings.user_currencies, vec!["USD", "EUR"]);
        assert_eq!(settings.user_stocks, vec!["AAPL", "AMZN"]);
    }
}
