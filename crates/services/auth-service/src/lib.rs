//! Auth Service Library
//!
//! Kakao OAuth login for the board service: builds the authorize URL,
//! interprets the redirect Kakao sends back and exchanges the authorization
//! code for tokens.

pub mod client;
pub mod config;
pub mod dto;
pub mod service;

use std::sync::Arc;

use common::AppResult;

pub use crate::client::{KakaoClient, TokenClient};
pub use crate::config::KakaoConfig;
pub use crate::dto::{AuthorizationCallback, AuthorizeRequest, KakaoTokenResponse, TokenRequest};
pub use crate::service::{KakaoAuthenticator, OAuthService};

/// Build the Kakao OAuth service from configuration.
pub fn build_oauth_service(config: KakaoConfig) -> AppResult<Arc<dyn OAuthService>> {
    let client = KakaoClient::new(&config)?;
    Ok(Arc::new(KakaoAuthenticator::new(config, Arc::new(client))))
}
