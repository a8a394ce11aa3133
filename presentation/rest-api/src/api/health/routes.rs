use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

const SERVICE_NAME: &str = "wishlist-service";

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Liveness endpoint for container orchestrators and load balancers.
pub struct HealthApi;

impl HealthApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns the current status of the service. Does not touch the database
    /// or the upstream services.
    ///
    /// ## Response
    /// - `status`: "healthy" if service is running
    /// - `service`: service name
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_report_healthy() {
        let service = OpenApiService::new(HealthApi::new(), "Wishlist Service API", "test");
        let client = TestClient::new(poem::Route::new().nest("/", service));

        let response = client.get("/health").send().await;

        response.assert_status_is_ok();
        let body = response.json().await;
        let body = body.value().object();
        body.get("status").assert_string("healthy");
        body.get("service").assert_string("wishlist-service");
    }
}
