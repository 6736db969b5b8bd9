//! Demo 1: Market Snapshot
//!
//! Showcases: public endpoints, allow-listed arguments, fail-soft responses
//!
//! Run: cargo run --bin market_snapshot -- ethbtc

use colored::*;
use cryptocom_rest::{ApiResponse, CryptoComClient, KlinePeriod};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "ethbtc".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  MARKET SNAPSHOT: {}", symbol).cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = CryptoComClient::new()?;

    report("Ticker", &client.ticker(Some(symbol.as_str())).await);
    report(
        "1h klines",
        &client.klines(&symbol, Some(KlinePeriod::H1.minutes())).await?,
    );
    report("Recent trades", &client.trades(&symbol).await);
    report("Depth (step1)", &client.depth(&symbol, Some("step1")).await?);

    // Arguments outside the allow-lists never reach the network
    match client.klines(&symbol, Some(7)).await {
        Err(e) => println!("{} {}", "✓ rejected locally:".green(), e),
        Ok(_) => println!("{}", "✗ period 7 was accepted".red()),
    }

    Ok(())
}

fn report(label: &str, response: &ApiResponse) {
    match response {
        ApiResponse::Failed(envelope) => {
            println!("{} {} ({})", "✗".red(), label.yellow(), envelope.msg);
        }
        ApiResponse::Body(body) => {
            let preview: String = body.to_string().chars().take(120).collect();
            println!(
                "{} {} code={:?}\n    {}",
                "✓".green(),
                label.yellow(),
                response.code(),
                preview.dimmed()
            );
        }
    }
}
