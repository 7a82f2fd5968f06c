//! HTTP request handlers.

pub mod board_handler;
pub mod comment_handler;
pub mod health_handler;
pub mod oauth_handler;
pub mod user_handler;

pub use board_handler::board_routes;
pub use comment_handler::comment_routes;
pub use health_handler::health_check;
pub use oauth_handler::oauth_routes;
pub use user_handler::user_routes;
