//! Response and query types for the REST API

use crate::transport::TransportResult;
use cryptocom_types::ErrorEnvelope;
use serde_json::Value;
use tracing::warn;

// ============================================================================
// API Response
// ============================================================================

/// Outcome of one HTTP round trip
///
/// Network failures never surface as `Err`; they arrive here as
/// [`ApiResponse::Failed`] carrying a `{code: -1, msg}` envelope. Callers
/// that only want the raw JSON can use [`ApiResponse::into_json`], which
/// yields the body or the envelope as a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// JSON body returned by the exchange, unmodified
    Body(Value),
    /// The request never produced a JSON body
    Failed(ErrorEnvelope),
}

impl ApiResponse {
    /// Fold a transport result into a response, logging failures
    pub(crate) fn settle(path: &str, result: TransportResult<Value>) -> Self {
        match result {
            Ok(body) => Self::Body(body),
            Err(e) => {
                warn!(path, error = %e, "Request failed");
                Self::Failed(ErrorEnvelope::transport(e.to_string()))
            }
        }
    }

    /// Returns true if the round trip failed at the transport level
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns true if the exchange answered with code `0`
    pub fn is_success(&self) -> bool {
        self.code() == Some(0)
    }

    /// The `code` field, whether the exchange sent it as a number or text
    ///
    /// Always `Some(-1)` for transport failures.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Failed(envelope) => Some(envelope.code),
            Self::Body(body) => match body.get("code")? {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            },
        }
    }

    /// The `msg` field, if any
    pub fn msg(&self) -> Option<&str> {
        match self {
            Self::Failed(envelope) => Some(&envelope.msg),
            Self::Body(body) => body.get("msg").and_then(Value::as_str),
        }
    }

    /// The response body, if the round trip succeeded
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Body(body) => Some(body),
            Self::Failed(_) => None,
        }
    }

    /// The failure envelope, if the round trip failed
    pub fn envelope(&self) -> Option<&ErrorEnvelope> {
        match self {
            Self::Failed(envelope) => Some(envelope),
            Self::Body(_) => None,
        }
    }

    /// The body, or the envelope rendered as a JSON object
    pub fn into_json(self) -> Value {
        match self {
            Self::Body(body) => body,
            Self::Failed(envelope) => envelope.to_json(),
        }
    }

    /// Convert into a `Result`, treating transport failure as the error
    pub fn into_result(self) -> Result<Value, ErrorEnvelope> {
        match self {
            Self::Body(body) => Ok(body),
            Self::Failed(envelope) => Err(envelope),
        }
    }
}

// ============================================================================
// Query Types
// ============================================================================

/// Optional filters for trade history
///
/// Dates use the `YYYY-MM-DD HH:MM:SS` shape and are checked before signing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeQuery {
    /// Earliest trade time
    pub start_date: Option<String>,
    /// Latest trade time
    pub end_date: Option<String>,
    /// Page number
    pub page: Option<u32>,
    /// Page size
    pub page_size: Option<u32>,
}

impl TradeQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set start date
    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    /// Set end date
    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    /// Set page number
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set page size
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Optional pagination for open orders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Page number
    pub page: Option<u32>,
    /// Page size
    pub page_size: Option<u32>,
}

impl PageQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page number
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set page size
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;
    use serde_json::json;

    #[test]
    fn test_code_as_text_or_number() {
        let text = ApiResponse::Body(json!({"code": "0", "msg": "suc", "data": []}));
        assert_eq!(text.code(), Some(0));
        assert!(text.is_success());
        assert_eq!(text.msg(), Some("suc"));

        let number = ApiResponse::Body(json!({"code": 100005, "msg": "sign error"}));
        assert_eq!(number.code(), Some(100005));
        assert!(!number.is_success());
        assert!(!number.is_failure());
    }

    #[test]
    fn test_body_without_code() {
        let response = ApiResponse::Body(json!([1, 2, 3]));
        assert_eq!(response.code(), None);
        assert_eq!(response.clone().into_json(), json!([1, 2, 3]));
    }

    #[test]
    fn test_settle_failure() {
        let response = ApiResponse::settle(
            "/v1/symbols",
            Err(TransportError::Decode("expected value at line 1".to_string())),
        );

        assert!(response.is_failure());
        assert_eq!(response.code(), Some(-1));
        assert!(!response.msg().unwrap_or_default().is_empty());

        let json = response.into_json();
        assert_eq!(json["code"], -1);
        assert!(json["msg"].as_str().unwrap().contains("expected value"));
    }

    #[test]
    fn test_into_result() {
        let ok = ApiResponse::Body(json!({"code": "0"}));
        assert!(ok.into_result().is_ok());

        let failed = ApiResponse::Failed(ErrorEnvelope::transport("timed out"));
        assert_eq!(failed.into_result().unwrap_err().msg, "timed out");
    }

    #[test]
    fn test_query_builders() {
        let query = TradeQuery::new()
            .start_date("2023-01-01 00:00:00")
            .page(2)
            .page_size(50);
        assert_eq!(query.start_date.as_deref(), Some("2023-01-01 00:00:00"));
        assert_eq!(query.end_date, None);
        assert_eq!(query.page, Some(2));

        let page = PageQuery::new().page_size(10);
        assert_eq!(page.page, None);
        assert_eq!(page.page_size, Some(10));
    }
}
