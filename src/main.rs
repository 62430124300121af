//! loan-advisor entry point.
//!
//! One advisory cycle per run: read the portfolio and market CSV files,
//! compose the advisory request, submit it to the configured model, print
//! the recommendation. Whether to follow or rerun the advice is up to the
//! investor.

mod config;

use std::fs;

use advisor_core::{compose, DEFAULT_POLICY};
use anyhow::{Context, Result};
use clap::Parser;
use llm_client::AdvisoryClient;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "loan-advisor",
    about = "Reads portfolio and market data and asks an advisory model how to invest a cash budget"
)]
struct Cli {
    /// Cash available to invest, in EUR.
    #[arg(long)]
    cash: f64,

    /// Prefix of the CSV files to read.
    #[arg(long)]
    prefix: String,

    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Log the composed request before submitting it.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config))?;
    let api_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;

    debug!(
        "Potentially investing {} EUR, using {} as a prefix",
        cli.cash, cli.prefix
    );

    let portfolio = read_dataset(&cli.prefix, "portfolio")?;
    let market = read_dataset(&cli.prefix, "loans")?;
    let secondary_market = read_dataset(&cli.prefix, "investments")?;

    let request = compose(
        cli.cash,
        DEFAULT_POLICY,
        Some(&portfolio),
        Some(&market),
        Some(&secondary_market),
    )?;
    debug!("composed advisory request:\n{request}");

    let client = AdvisoryClient::new(api_key, config.llm.model.clone(), config.llm.timeout_ms)
        .with_base_url(config.llm.api_base.clone());
    info!("Requesting advice from {}", client.model());

    let advice = client.advise(&request).await?;
    println!("{advice}");

    Ok(())
}

fn read_dataset(prefix: &str, suffix: &str) -> Result<String> {
    let path = format!("{prefix}_{suffix}.csv");
    fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))
}
