//! Board service configuration.

use std::env;

use auth_service_lib::KakaoConfig;
use common::{DatabaseConfig, ServiceConfig};

/// Board service configuration.
#[derive(Debug, Clone)]
pub struct BoardServiceConfig {
    /// HTTP listener settings
    pub service: ServiceConfig,
    /// Connection pool settings
    pub database: DatabaseConfig,
    /// Kakao OAuth application
    pub kakao: KakaoConfig,
}

impl BoardServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                host: env::var("BOARD_SERVICE_HOST").unwrap_or(defaults.service.host),
                port: env::var("BOARD_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.service.port),
            },
            database: DatabaseConfig {
                url: env::var("BOARD_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
            kakao: KakaoConfig::from_env(),
        }
    }
}

impl Default for BoardServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            database: DatabaseConfig::default(),
            kakao: KakaoConfig::default(),
        }
    }
}
