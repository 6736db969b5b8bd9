//! Demo 2: Account Overview
//!
//! Showcases: credential loading, signed requests, pagination
//!
//! Run: CRYPTOCOM_API_KEY=... CRYPTOCOM_SECRET_KEY=... cargo run --bin account_overview

use colored::*;
use cryptocom_rest::{Credentials, CryptoComClient, PageQuery, TradeQuery};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!("  Set CRYPTOCOM_API_KEY and CRYPTOCOM_SECRET_KEY to run this demo.");
            return Ok(());
        }
    };

    println!("{} Loaded {:?}", "✓".green(), credentials);

    let client = CryptoComClient::with_credentials(credentials)?;

    let balance = client.balance().await?;
    if balance.is_failure() {
        println!("{} balance request failed: {:?}", "✗".red(), balance.msg());
        return Ok(());
    }
    println!("{} Balance code={:?}", "✓".green(), balance.code());
    println!("{}", serde_json::to_string_pretty(&balance.into_json())?);

    let open = client
        .open_orders("ethbtc", &PageQuery::new().page(1).page_size(20))
        .await?;
    println!("{} Open orders code={:?}", "✓".green(), open.code());

    let trades = client
        .get_trades(
            "ethbtc",
            &TradeQuery::new()
                .start_date("2024-01-01 00:00:00")
                .page_size(20),
        )
        .await?;
    println!("{} Trades code={:?}", "✓".green(), trades.code());

    Ok(())
}
