//! Kakao login orchestration.
//!
//! Every step ends in a redirect, so each operation returns the location the
//! handler should send the user agent to.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use url::{form_urlencoded, Url};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::client::TokenClient;
use crate::config::KakaoConfig;
use crate::dto::{AuthorizationCallback, AuthorizeRequest, TokenExchangeForm, TokenRequest};
use common::{AppError, AppResult};

/// Local route that starts the flow
pub const AUTHORIZE_PATH: &str = "/oauth/authorize";
/// Local route that performs the code exchange
pub const TOKEN_PATH: &str = "/oauth/token";
/// Front-end page that receives the issued token
pub const VOTES_PATH: &str = "/votes";

const GRANT_TYPE: &str = "authorization_code";

/// OAuth service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OAuthService: Send + Sync {
    /// Kakao authorize URL for the given optional parameters
    fn authorize_url(&self, request: &AuthorizeRequest) -> AppResult<String>;

    /// Where to send the user agent after Kakao redirected back
    fn callback_redirect(&self, callback: &AuthorizationCallback) -> String;

    /// Exchange the code and return the front-end location carrying the token
    async fn token_redirect(&self, request: TokenRequest) -> AppResult<String>;
}

/// [`OAuthService`] backed by Kakao.
pub struct KakaoAuthenticator {
    config: KakaoConfig,
    client: Arc<dyn TokenClient>,
}

impl KakaoAuthenticator {
    pub fn new(config: KakaoConfig, client: Arc<dyn TokenClient>) -> Self {
        Self { config, client }
    }

    fn exchange_form(&self, code: String) -> TokenExchangeForm {
        TokenExchangeForm {
            grant_type: GRANT_TYPE,
            client_id: self.config.client_id.clone(),
            redirect_uri: self.config.redirect_uri.clone(),
            code,
            client_secret: self.config.client_secret.clone(),
        }
    }
}

/// `path?key=value` with the value form-encoded
fn local_redirect(path: &str, key: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{}?{}", path, query)
}

#[async_trait]
impl OAuthService for KakaoAuthenticator {
    fn authorize_url(&self, request: &AuthorizeRequest) -> AppResult<String> {
        let mut params = vec![
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];
        for (key, value) in [
            ("scope", &request.scope),
            ("state", &request.state),
            ("prompt", &request.prompt),
        ] {
            if let Some(value) = value {
                params.push((key, value.as_str()));
            }
        }

        let url = Url::parse_with_params(&self.config.authorize_endpoint(), &params)
            .map_err(|e| AppError::internal(format!("invalid authorize URL: {}", e)))?;

        Ok(url.into())
    }

    fn callback_redirect(&self, callback: &AuthorizationCallback) -> String {
        if callback.is_error() {
            warn!(
                "Kakao authorization failed: {} {}",
                callback.error.as_deref().unwrap_or("missing code"),
                callback.error_description.as_deref().unwrap_or_default()
            );
            return AUTHORIZE_PATH.to_string();
        }

        let code = callback.code.as_deref().unwrap_or_default();
        local_redirect(TOKEN_PATH, "code", code)
    }

    async fn token_redirect(&self, request: TokenRequest) -> AppResult<String> {
        if request.code.trim().is_empty() {
            return Err(AppError::bad_request("authorization code is required"));
        }

        let form = self.exchange_form(request.code);
        let tokens = self.client.exchange_code(&form).await?;
        info!("Kakao token issued (type: {})", tokens.token_type);

        Ok(local_redirect(VOTES_PATH, "token", tokens.preferred_token()))
    }
}
