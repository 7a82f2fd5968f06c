//! HTTP client for the Kakao token endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::KakaoConfig;
use crate::dto::{KakaoTokenResponse, TokenExchangeForm};
use common::{AppError, AppResult};

const CONNECT_TIMEOUT_SECS: u64 = 5;
const TOTAL_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "togethersee-board/0.1";

/// Name used in ServiceUnavailable errors
const UPSTREAM: &str = "kakao";

/// Token exchange against the authorization server.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait TokenClient: Send + Sync {
    /// Exchange an authorization code for tokens
    async fn exchange_code(&self, form: &TokenExchangeForm) -> AppResult<KakaoTokenResponse>;
}

/// reqwest-backed [`TokenClient`].
pub struct KakaoClient {
    client: Client,
    token_url: String,
}

impl KakaoClient {
    /// Create a client bound to the configured token endpoint.
    pub fn new(config: &KakaoConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(TOTAL_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::internal(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            token_url: config.token_endpoint(),
        })
    }
}

#[async_trait]
impl TokenClient for KakaoClient {
    async fn exchange_code(&self, form: &TokenExchangeForm) -> AppResult<KakaoTokenResponse> {
        debug!("Exchanging authorization code at {}", self.token_url);

        let response = self
            .client
            .post(&self.token_url)
            .form(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Kakao token request failed: {}", e);
                AppError::service_unavailable(UPSTREAM)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Kakao token endpoint returned {}: {}", status, body);
            return Err(status_error(status));
        }

        response
            .json::<KakaoTokenResponse>()
            .await
            .map_err(|e| AppError::internal(format!("invalid token response: {}", e)))
    }
}

/// Map a non-success status from the token endpoint.
///
/// A rejected code or bad credentials (4xx) means the login failed; anything
/// else is an upstream outage.
fn status_error(status: StatusCode) -> AppError {
    if status.is_client_error() {
        AppError::Unauthorized
    } else {
        AppError::service_unavailable(UPSTREAM)
    }
}
