//! Application state - Dependency injection container.

use std::sync::Arc;

use auth_service_lib::OAuthService;

use crate::infra::Database;
use crate::repository::Persistence;
use crate::service::{BoardManager, BoardService, UserManager, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Board service
    pub board_service: Arc<dyn BoardService>,
    /// Kakao OAuth flow
    pub oauth_service: Arc<dyn OAuthService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the database-backed services around one Unit of Work.
    pub fn from_database(database: Arc<Database>, oauth_service: Arc<dyn OAuthService>) -> Self {
        let uow = Arc::new(Persistence::new(database.get_connection()));

        Self {
            user_service: Arc::new(UserManager::new(uow.clone())),
            board_service: Arc::new(BoardManager::new(uow)),
            oauth_service,
            database,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        board_service: Arc<dyn BoardService>,
        oauth_service: Arc<dyn OAuthService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            user_service,
            board_service,
            oauth_service,
            database,
        }
    }
}
