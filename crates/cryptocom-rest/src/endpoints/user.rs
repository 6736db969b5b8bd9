//! Private account endpoints
//!
//! These endpoints require authentication. Every call builds its own
//! parameter set, signs it, and POSTs the signed parameters as a form body.

use crate::endpoints::endpoint_url;
use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::{ApiResponse, PageQuery, TradeQuery};
use cryptocom_auth::RequestSigner;
use cryptocom_types::{validate_date_time, Params};
use tracing::{debug, instrument};

/// Private account endpoints
pub struct UserEndpoints<'a> {
    transport: &'a dyn Transport,
    base_url: &'a str,
    signer: &'a RequestSigner,
}

impl<'a> UserEndpoints<'a> {
    /// Create user endpoints that sign with `signer`
    pub fn new(transport: &'a dyn Transport, base_url: &'a str, signer: &'a RequestSigner) -> Self {
        Self {
            transport,
            base_url,
            signer,
        }
    }

    /// Make an authenticated POST request
    async fn post(&self, path: &str, params: Params) -> ApiResponse {
        let signed = self.signer.sign(params);
        let url = endpoint_url(self.base_url, path);

        debug!("Making authenticated request to {}", path);

        ApiResponse::settle(path, self.transport.post(&url, &signed).await)
    }

    /// List all account balances
    #[instrument(skip(self))]
    pub async fn balance(&self) -> ApiResponse {
        self.post("/v1/account", Params::new()).await
    }

    /// Get order detail
    #[instrument(skip(self))]
    pub async fn show_order(&self, symbol: &str, order_id: &str) -> ApiResponse {
        let params = Params::new()
            .with("symbol", symbol)
            .with("order_id", order_id);
        self.post("/v1/showOrder", params).await
    }

    /// Cancel all orders in a market
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(&self, symbol: &str) -> ApiResponse {
        let params = Params::new().with("symbol", symbol);
        self.post("/v1/cancelAllOrders", params).await
    }

    /// Cancel an order
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, symbol: &str, order_id: &str) -> ApiResponse {
        let params = Params::new()
            .with("symbol", symbol)
            .with("order_id", order_id);
        self.post("/v1/orders/cancel", params).await
    }

    /// List all orders in a market
    #[instrument(skip(self))]
    pub async fn get_all_orders(&self, symbol: &str) -> ApiResponse {
        let params = Params::new().with("symbol", symbol);
        self.post("/v1/allOrders", params).await
    }

    /// List executed trades
    ///
    /// # Errors
    /// [`RestError::Validation`](crate::RestError::Validation) if a date
    /// does not have the `YYYY-MM-DD HH:MM:SS` shape. Nothing is signed or
    /// sent in that case.
    #[instrument(skip(self))]
    pub async fn get_trades(&self, symbol: &str, query: &TradeQuery) -> RestResult<ApiResponse> {
        let mut params = Params::new().with("symbol", symbol);

        if let Some(start_date) = &query.start_date {
            validate_date_time("start_date", start_date)?;
            params.insert("startDate", start_date);
        }
        if let Some(end_date) = &query.end_date {
            validate_date_time("end_date", end_date)?;
            params.insert("endDate", end_date);
        }
        params.insert_opt("page", query.page);
        params.insert_opt("pageSize", query.page_size);

        Ok(self.post("/v1/myTrades", params).await)
    }

    /// List open orders in a market
    #[instrument(skip(self))]
    pub async fn open_orders(&self, symbol: &str, query: &PageQuery) -> ApiResponse {
        let mut params = Params::new().with("symbol", symbol);
        params.insert_opt("page", query.page);
        params.insert_opt("pageSize", query.page_size);

        self.post("/v1/openOrders", params).await
    }
}
