//! Main REST client implementation

use crate::endpoints::{MarketEndpoints, UserEndpoints};
use crate::error::{RestError, RestResult};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{ApiResponse, PageQuery, TradeQuery};
use cryptocom_auth::{Credentials, RequestSigner};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Exchange REST base URL
pub const API_URL: &str = "https://api.crypto.com";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("cryptocom-rest/", env!("CARGO_PKG_VERSION"));

/// Crypto.com REST API client
///
/// Provides access to both public and private endpoints. Cloning is cheap;
/// clones share the underlying HTTP transport.
///
/// Transport failures are never returned as `Err`. Every endpoint yields an
/// [`ApiResponse`], and a failed round trip shows up as
/// [`ApiResponse::Failed`] with code `-1`. Check [`ApiResponse::code`]
/// rather than relying on `?` to catch network problems.
///
/// # Example
///
/// ```no_run
/// use cryptocom_rest::{CryptoComClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = CryptoComClient::new()?;
///     let ticker = client.ticker(Some("ethbtc")).await;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = CryptoComClient::with_credentials(creds)?;
///     let balance = auth_client.balance().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CryptoComClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    signer: Option<RequestSigner>,
}

impl CryptoComClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let transport =
            ReqwestTransport::new(Duration::from_secs(config.timeout_secs), user_agent)
                .map_err(RestError::ClientBuild)?;

        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        info!(
            base_url = %config.base_url,
            authenticated = config.credentials.is_some(),
            "Created Crypto.com REST client"
        );

        Self {
            transport,
            base_url: config.base_url,
            signer: config.credentials.map(RequestSigner::new),
        }
    }

    /// Replace the request signer (e.g. to sign with a fixed clock)
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.signer.is_some()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self.transport.as_ref(), &self.base_url)
    }

    /// List all available market symbols
    pub async fn symbols(&self) -> ApiResponse {
        self.market().symbols().await
    }

    /// Get tickers in one market, or all markets
    pub async fn ticker(&self, symbol: Option<&str>) -> ApiResponse {
        self.market().ticker(symbol).await
    }

    /// Get latest execution price for all markets
    pub async fn ticker_price(&self) -> ApiResponse {
        self.market().ticker_price().await
    }

    /// Get k-line data; `period` in minutes, default 1
    pub async fn klines(&self, symbol: &str, period: Option<u32>) -> RestResult<ApiResponse> {
        self.market().klines(symbol, period).await
    }

    /// Get the last 200 trades in a market
    pub async fn trades(&self, symbol: &str) -> ApiResponse {
        self.market().trades(symbol).await
    }

    /// Get order book depth; `step` defaults to `step0`
    pub async fn depth(&self, symbol: &str, step: Option<&str>) -> RestResult<ApiResponse> {
        self.market().depth(symbol, step).await
    }

    // ========================================================================
    // Private User Endpoints
    // ========================================================================

    /// Get user endpoints (requires credentials)
    pub fn user(&self) -> RestResult<UserEndpoints<'_>> {
        let signer = self.signer.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(UserEndpoints::new(
            self.transport.as_ref(),
            &self.base_url,
            signer,
        ))
    }

    /// List all account balances
    pub async fn balance(&self) -> RestResult<ApiResponse> {
        Ok(self.user()?.balance().await)
    }

    /// Get order detail
    pub async fn show_order(&self, symbol: &str, order_id: &str) -> RestResult<ApiResponse> {
        Ok(self.user()?.show_order(symbol, order_id).await)
    }

    /// Cancel all orders in a market
    pub async fn cancel_all_orders(&self, symbol: &str) -> RestResult<ApiResponse> {
        Ok(self.user()?.cancel_all_orders(symbol).await)
    }

    /// Cancel an order
    pub async fn cancel_order(&self, symbol: &str, order_id: &str) -> RestResult<ApiResponse> {
        Ok(self.user()?.cancel_order(symbol, order_id).await)
    }

    /// List all orders in a market
    pub async fn get_all_orders(&self, symbol: &str) -> RestResult<ApiResponse> {
        Ok(self.user()?.get_all_orders(symbol).await)
    }

    /// List executed trades
    pub async fn get_trades(&self, symbol: &str, query: &TradeQuery) -> RestResult<ApiResponse> {
        self.user()?.get_trades(symbol, query).await
    }

    /// List open orders in a market
    pub async fn open_orders(&self, symbol: &str, query: &PageQuery) -> RestResult<ApiResponse> {
        Ok(self.user()?.open_orders(symbol, query).await)
    }
}

impl std::fmt::Debug for CryptoComClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoComClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Base URL endpoint paths are appended to
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
