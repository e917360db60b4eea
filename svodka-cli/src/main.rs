use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use svodka_core::{CashbackRates, Outcome, dashboard, spending_report};
use svodka_ingest::{read_operations_csv, save_report};
use svodka_market::{fetch_currency_rates, fetch_stock_prices};
use tracing_subscriber::EnvFilter;

mod settings;

#[derive(Parser, Debug)]
#[command(
    name = "svodka",
    version,
    about = "Bank statement analytics: cashback ranking, spending reports, dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank categories by hypothetical increased-cashback benefit
    Cashback {
        /// Operations CSV export
        #[arg(long, default_value = "operations.csv")]
        csv: PathBuf,

        #[arg(long)]
        year: i32,

        #[arg(long)]
        month: u32,
    },

    /// Trailing-90-day spending report for one category
    Spending {
        #[arg(long, default_value = "operations.csv")]
        csv: PathBuf,

        #[arg(long)]
        category: String,

        /// Reference date YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Write the report to this CSV file
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write the report to a timestamped report_<...>.csv
        #[arg(long)]
        save: bool,
    },

    /// Assemble the dashboard JSON payload
    Dashboard {
        #[arg(long, default_value = "operations.csv")]
        csv: PathBuf,

        /// user_settings.json with user_currencies and user_stocks
        #[arg(long, default_value = "user_settings.json")]
        settings: PathBuf,

        /// Closing instant "YYYY-MM-DD HH:MM:SS" (default: now)
        #[arg(long)]
        at: Option<String>,

        /// Alpha Vantage API key (falls back to $STOCK_API)
        #[arg(long)]
        stock_api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Cashback { csv, year, month } => run_cashback(csv, year, month),
        Command::Spending {
            csv,
            category,
            date,
            out,
            save,
        } => run_spending(csv, category, date, out, save),
        Command::Dashboard {
            csv,
            settings,
            at,
            stock_api_key,
        } => run_dashboard(csv, settings, at, stock_api_key).await,
    }
}

fn load_transactions(csv: &Path) -> Result<Vec<svodka_core::Transaction>> {
    let txns = read_operations_csv(csv).with_context(|| format!("loading {}", csv.display()))?;
    tracing::info!(count = txns.len(), path = %csv.display(), "loaded operations");
    Ok(txns)
}

fn run_cashback(csv: PathBuf, year: i32, month: u32) -> Result<()> {
    let txns = load_transactions(&csv)?;
    match svodka_core::analyze_cashback_categories(&txns, year, month, CashbackRates::default()) {
        Outcome::Data(ranked) => println!("{}", serde_json::to_string_pretty(&ranked)?),
        Outcome::Empty(reason) => println!("no data: {reason}"),
    }
    Ok(())
}

fn run_spending(
    csv: PathBuf,
    category: String,
    date: Option<String>,
    out: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let txns = load_transactions(&csv)?;
    let report = spending_report(&txns, &category, date.as_deref());

    match &report {
        Outcome::Data(rows) => {
            let total: f64 = rows.iter().map(|t| t.amount).sum();
            println!("{} rows in '{category}', total {total:.2}", rows.len());
        }
        Outcome::Empty(reason) => println!("no data: {reason}"),
    }

    if save || out.is_some() {
        let rows = report.into_rows();
        // A failed save is logged but does not fail the report run.
        if let Err(err) = save_report(&rows, out.as_deref()) {
            tracing::error!(%err, "report not saved");
        }
    }
    Ok(())
}

async fn run_dashboard(
    csv: PathBuf,
    settings: PathBuf,
    at: Option<String>,
    stock_api_key: Option<String>,
) -> Result<()> {
    let txns = load_transactions(&csv)?;
    let settings = settings::load_settings(&settings)?;

    let at = match at {
        Some(s) => NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S")
            .with_context(|| format!("parsing --at '{s}' as YYYY-MM-DD HH:MM:SS"))?,
        None => Local::now().naive_local(),
    };

    let client = reqwest::Client::new();
    let currency_rates = fetch_currency_rates(&client, &settings.user_currencies).await;

    let api_key = stock_api_key.or_else(|| std::env::var("STOCK_API").ok());
    let stock_prices = match api_key {
        Some(key) => fetch_stock_prices(&client, &key, &settings.user_stocks).await,
        None => {
            tracing::warn!("no stock API key given, skipping stock prices");
            Vec::new()
        }
    };

    let payload = dashboard::assemble(&txns, at, currency_rates, stock_prices);
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
