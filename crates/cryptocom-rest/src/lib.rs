//! REST API client for the Crypto.com exchange
//!
//! # Features
//!
//! - **Market Data**: Symbols, tickers, k-lines, recent trades, depth
//! - **Account**: Balances, order lookup and cancellation, trade history,
//!   open orders
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each request is signed with a
//! SHA-256 digest over the sorted parameters, see [`cryptocom_auth`].
//!
//! # Failure model
//!
//! Two kinds of failure, kept apart in the types:
//!
//! - Bad arguments (k-line period, depth step, date pattern) are rejected
//!   with [`RestError`] before anything is sent.
//! - Network and decoding failures are *not* errors. They come back as
//!   [`ApiResponse::Failed`] holding `{code: -1, msg}`, so callers must look
//!   at [`ApiResponse::code`] to notice them.
//!
//! # Example
//!
//! ```no_run
//! use cryptocom_rest::{CryptoComClient, Credentials, TradeQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = CryptoComClient::new()?;
//!     let klines = client.klines("ethbtc", Some(60)).await?;
//!     if klines.is_failure() {
//!         eprintln!("request failed: {:?}", klines.msg());
//!     }
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = CryptoComClient::with_credentials(creds)?;
//!     let trades = auth_client
//!         .get_trades("ethbtc", &TradeQuery::new().start_date("2024-01-01 00:00:00"))
//!         .await?;
//!     println!("Trades: {}", trades.into_json());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, CryptoComClient, API_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{RestError, RestResult};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportResult};
pub use types::{ApiResponse, PageQuery, TradeQuery};

pub use cryptocom_auth::{Credentials, RequestSigner};
pub use cryptocom_types::{DepthStep, ErrorEnvelope, KlinePeriod, ParamValue, Params, TypeError};
