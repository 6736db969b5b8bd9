//! Error types for REST API operations
//!
//! Only caller mistakes surface as [`RestError`]. Failures of the HTTP round
//! trip itself never do: they are folded into an
//! [`ErrorEnvelope`](cryptocom_types::ErrorEnvelope) inside
//! [`ApiResponse::Failed`](crate::types::ApiResponse::Failed).

use cryptocom_types::TypeError;

/// Errors that can occur before a request is sent
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Invalid request argument (period, step or date pattern)
    #[error("Invalid parameter: {0}")]
    Validation(#[from] TypeError),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl RestError {
    /// Check if this error came from argument validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_conversion() {
        let err: RestError = TypeError::InvalidPeriod(7).into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_auth_required_is_not_validation() {
        assert!(!RestError::AuthRequired.is_validation());
    }
}
