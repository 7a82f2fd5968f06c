//! Outbound HTTP clients.

mod kakao_client;

pub use kakao_client::{KakaoClient, TokenClient};

#[cfg(any(test, feature = "test-utils"))]
pub use kakao_client::MockTokenClient;
