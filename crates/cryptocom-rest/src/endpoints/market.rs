//! Public market data endpoints
//!
//! These endpoints don't require authentication. All of them are GETs with
//! the parameters in the query string.

use crate::endpoints::endpoint_url;
use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::ApiResponse;
use cryptocom_types::{DepthStep, KlinePeriod, Params};
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    transport: &'a dyn Transport,
    base_url: &'a str,
}

impl<'a> MarketEndpoints<'a> {
    /// Create market endpoints over a transport and base URL
    pub fn new(transport: &'a dyn Transport, base_url: &'a str) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    async fn get(&self, path: &str, params: Params) -> ApiResponse {
        let url = endpoint_url(self.base_url, path);
        ApiResponse::settle(path, self.transport.get(&url, &params).await)
    }

    /// List all available market symbols
    #[instrument(skip(self))]
    pub async fn symbols(&self) -> ApiResponse {
        debug!("Fetching symbols");
        self.get("/v1/symbols", Params::new()).await
    }

    /// Get tickers in one market, or all markets when `symbol` is `None`
    #[instrument(skip(self))]
    pub async fn ticker(&self, symbol: Option<&str>) -> ApiResponse {
        debug!("Fetching ticker");

        let mut params = Params::new();
        params.insert_opt("symbol", symbol);

        self.get("/v1/ticker", params).await
    }

    /// Get latest execution price for all markets
    #[instrument(skip(self))]
    pub async fn ticker_price(&self) -> ApiResponse {
        debug!("Fetching ticker prices");
        self.get("/v1/ticker/price", Params::new()).await
    }

    /// Get k-line data over a period
    ///
    /// # Arguments
    /// * `symbol` - Market symbol (e.g., "ethbtc")
    /// * `period` - Candle length in minutes, default 1. One of
    ///   1, 5, 15, 30, 60, 1440, 10080, 43200.
    ///
    /// # Errors
    /// [`RestError::Validation`](crate::RestError::Validation) for any other
    /// period, before anything is sent.
    #[instrument(skip(self))]
    pub async fn klines(&self, symbol: &str, period: Option<u32>) -> RestResult<ApiResponse> {
        let period = match period {
            Some(minutes) => KlinePeriod::try_from(minutes)?,
            None => KlinePeriod::default(),
        };

        debug!("Fetching {} klines for {}", period, symbol);

        let params = Params::new().with("symbol", symbol).with("period", period);
        Ok(self.get("/v1/klines", params).await)
    }

    /// Get the last 200 trades in a market
    #[instrument(skip(self))]
    pub async fn trades(&self, symbol: &str) -> ApiResponse {
        debug!("Fetching trades for {}", symbol);

        let params = Params::new().with("symbol", symbol);
        self.get("/v1/trades", params).await
    }

    /// Get order book depth
    ///
    /// # Arguments
    /// * `symbol` - Market symbol (e.g., "ethbtc")
    /// * `step` - Aggregation step, default `step0`. One of `step0`, `step1`,
    ///   `step2`; sent as the `type` parameter.
    #[instrument(skip(self))]
    pub async fn depth(&self, symbol: &str, step: Option<&str>) -> RestResult<ApiResponse> {
        let step = match step {
            Some(step) => step.parse::<DepthStep>()?,
            None => DepthStep::default(),
        };

        debug!("Fetching {} depth for {}", step, symbol);

        let params = Params::new().with("symbol", symbol).with("type", step);
        Ok(self.get("/v1/depth", params).await)
    }
}
