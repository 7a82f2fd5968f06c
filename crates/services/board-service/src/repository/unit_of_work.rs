//! Unit of Work: single access point to the repositories.
//!
//! Services depend on this trait instead of on individual repositories, so a
//! test can swap the whole persistence layer for mocks in one place.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{BoardRepository, BoardStore, UserRepository, UserStore};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get board repository
    fn boards(&self) -> Arc<dyn BoardRepository>;
}

/// Concrete implementation of UnitOfWork over one connection pool
pub struct Persistence {
    user_repo: Arc<UserStore>,
    board_repo: Arc<BoardStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            board_repo: Arc::new(BoardStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn boards(&self) -> Arc<dyn BoardRepository> {
        self.board_repo.clone()
    }
}
