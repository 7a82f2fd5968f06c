//! Query and payload types of the Kakao authorization code flow.

use serde::{Deserialize, Serialize};

/// Optional parameters forwarded to the Kakao authorize endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AuthorizeRequest {
    /// Additional consent items, comma separated
    pub scope: Option<String>,
    /// Opaque value echoed back on the redirect
    pub state: Option<String>,
    /// `login` to force re-authentication
    pub prompt: Option<String>,
}

/// Query Kakao appends when redirecting the user agent back
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AuthorizationCallback {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub state: Option<String>,
}

impl AuthorizationCallback {
    /// The callback carries an error or no usable code
    pub fn is_error(&self) -> bool {
        self.error.is_some() || self.code.as_deref().map_or(true, str::is_empty)
    }
}

/// Authorization code to exchange for tokens
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct TokenRequest {
    pub code: String,
}

/// Form body posted to the Kakao token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenExchangeForm {
    pub grant_type: &'static str,
    pub client_id: String,
    pub redirect_uri: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

/// Token endpoint response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KakaoTokenResponse {
    pub token_type: String,
    pub access_token: String,
    /// Present only when the `openid` scope was granted
    pub id_token: Option<String>,
    pub expires_in: i64,
    pub refresh_token: Option<String>,
    pub refresh_token_expires_in: Option<i64>,
    pub scope: Option<String>,
}

impl KakaoTokenResponse {
    /// Token handed to the front end: the id token, else the access token
    pub fn preferred_token(&self) -> &str {
        self.id_token.as_deref().unwrap_or(&self.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_without_code_counts_as_error() {
        let callback = AuthorizationCallback::default();
        assert!(callback.is_error());

        let callback = AuthorizationCallback {
            code: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(!callback.is_error());

        let callback = AuthorizationCallback {
            code: Some("abc".to_string()),
            error: Some("access_denied".to_string()),
            ..Default::default()
        };
        assert!(callback.is_error());
    }

    #[test]
    fn token_response_parses_kakao_payload() {
        let body = r#"{
            "token_type": "bearer",
            "access_token": "access",
            "expires_in": 21599,
            "refresh_token": "refresh",
            "refresh_token_expires_in": 5183999
        }"#;

        let response: KakaoTokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.preferred_token(), "access");
        assert!(response.scope.is_none());
    }
}
