//! Kakao OAuth configuration.

use std::env;
use std::fmt;

/// Default Kakao authorization server.
pub const DEFAULT_KAKAO_AUTH_HOST: &str = "https://kauth.kakao.com";

/// Kakao OAuth application settings.
#[derive(Clone)]
pub struct KakaoConfig {
    /// REST API key of the Kakao application
    pub client_id: String,
    /// Optional client secret, sent with the token exchange when set
    pub client_secret: Option<String>,
    /// Redirect URI registered with Kakao
    pub redirect_uri: String,
    /// Authorization server base URL, without trailing slash
    pub auth_host: String,
}

impl KakaoConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("KAKAO_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("KAKAO_CLIENT_SECRET")
                .ok()
                .filter(|s| !s.is_empty()),
            redirect_uri: env::var("KAKAO_REDIRECT_URI")
                .unwrap_or_else(|_| "http://localhost:8080/oauth/redirect".to_string()),
            auth_host: env::var("KAKAO_AUTH_HOST")
                .map(|h| h.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_KAKAO_AUTH_HOST.to_string()),
        }
    }

    /// Kakao authorize endpoint
    pub fn authorize_endpoint(&self) -> String {
        format!("{}/oauth/authorize", self.auth_host)
    }

    /// Kakao token endpoint
    pub fn token_endpoint(&self) -> String {
        format!("{}/oauth/token", self.auth_host)
    }
}

impl Default for KakaoConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: None,
            redirect_uri: "http://localhost:8080/oauth/redirect".to_string(),
            auth_host: DEFAULT_KAKAO_AUTH_HOST.to_string(),
        }
    }
}

// Keeps the client secret out of logs.
impl fmt::Debug for KakaoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KakaoConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("redirect_uri", &self.redirect_uri)
            .field("auth_host", &self.auth_host)
            .finish()
    }
}
