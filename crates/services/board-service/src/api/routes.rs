//! Application route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{board_routes, comment_routes, health_check, oauth_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/users", user_routes())
        .nest("/api/boards", board_routes().merge(comment_routes()))
        .nest("/oauth", oauth_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
