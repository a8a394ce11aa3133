use super::{cors_config, server_config::ServerConfig, upstream_config::UpstreamConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            upstream: UpstreamConfig::from_env(),
        }
    }
}
