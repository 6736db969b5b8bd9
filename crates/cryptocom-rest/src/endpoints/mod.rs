//! API endpoint implementations

pub mod market;
pub mod user;

pub use market::MarketEndpoints;
pub use user::UserEndpoints;

/// Join a base URL and an endpoint path
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("https://api.crypto.com", "/v1/symbols"),
            "https://api.crypto.com/v1/symbols"
        );
        assert_eq!(
            endpoint_url("http://localhost:8080/", "/v1/ticker"),
            "http://localhost:8080/v1/ticker"
        );
    }
}
