use std::env;
use std::time::Duration;

/// Location of the product catalog and cart services.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub product_service_url: String,
    pub cart_service_url: String,
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Environment variables:
    /// - PRODUCT_SERVICE_URL (default: "http://127.0.0.1:5001")
    /// - CART_SERVICE_URL (default: "http://127.0.0.1:5002")
    /// - UPSTREAM_TIMEOUT_SECS (default: 30)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let product_service_url = lookup("PRODUCT_SERVICE_URL")
            .unwrap_or_else(|| "http://127.0.0.1:5001".to_string());
        let cart_service_url =
            lookup("CART_SERVICE_URL").unwrap_or_else(|| "http://127.0.0.1:5002".to_string());
        let timeout_secs = lookup("UPSTREAM_TIMEOUT_SECS")
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);

        Self {
            product_service_url,
            cart_service_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
