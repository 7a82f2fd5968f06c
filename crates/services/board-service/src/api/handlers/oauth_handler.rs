//! Kakao OAuth handlers.
//!
//! Each endpoint answers with a redirect; the browser walks through
//! authorize, redirect and token in turn.

use axum::{
    extract::{Query, State},
    response::Redirect,
    routing::get,
    Router,
};

use auth_service_lib::{AuthorizationCallback, AuthorizeRequest, TokenRequest};
use common::AppResult;

use crate::api::AppState;

/// Create OAuth routes
pub fn oauth_routes() -> Router<AppState> {
    Router::new()
        .route("/authorize", get(authorize))
        .route("/redirect", get(redirect))
        .route("/token", get(token))
}

/// Start the Kakao login
#[utoipa::path(
    get,
    path = "/oauth/authorize",
    tag = "OAuth",
    params(AuthorizeRequest),
    responses(
        (status = 303, description = "Redirect to the Kakao authorize page")
    )
)]
pub async fn authorize(
    State(state): State<AppState>,
    Query(request): Query<AuthorizeRequest>,
) -> AppResult<Redirect> {
    let url = state.oauth_service.authorize_url(&request)?;
    Ok(Redirect::to(&url))
}

/// Landing point Kakao redirects back to
#[utoipa::path(
    get,
    path = "/oauth/redirect",
    tag = "OAuth",
    params(AuthorizationCallback),
    responses(
        (status = 303, description = "Redirect to the token exchange, or back to authorize on error")
    )
)]
pub async fn redirect(
    State(state): State<AppState>,
    Query(callback): Query<AuthorizationCallback>,
) -> Redirect {
    Redirect::to(&state.oauth_service.callback_redirect(&callback))
}

/// Exchange the authorization code and hand the token to the front end
#[utoipa::path(
    get,
    path = "/oauth/token",
    tag = "OAuth",
    params(TokenRequest),
    responses(
        (status = 303, description = "Redirect to /votes carrying the token"),
        (status = 400, description = "Missing authorization code"),
        (status = 401, description = "Kakao rejected the code"),
        (status = 503, description = "Kakao unreachable")
    )
)]
pub async fn token(
    State(state): State<AppState>,
    Query(request): Query<TokenRequest>,
) -> AppResult<Redirect> {
    let location = state.oauth_service.token_redirect(request).await?;
    Ok(Redirect::to(&location))
}
