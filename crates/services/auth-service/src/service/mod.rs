//! OAuth flow business logic.

mod oauth_service;

pub use oauth_service::{KakaoAuthenticator, OAuthService, AUTHORIZE_PATH, TOKEN_PATH, VOTES_PATH};

#[cfg(any(test, feature = "test-utils"))]
pub use oauth_service::MockOAuthService;
