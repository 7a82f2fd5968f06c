//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{CreateUser, UpdateUser, User, USER_NOT_FOUND};

use crate::repository::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user
    async fn create_user(&self, data: CreateUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Change password and/or phone number
    async fn update_user(&self, id: Uuid, update: UpdateUser) -> AppResult<User>;

    /// Delete user; `true` once removed
    async fn delete_user(&self, id: Uuid) -> AppResult<bool>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn create_user(&self, data: CreateUser) -> AppResult<User> {
        let user = self.uow.users().create(data).await?;
        tracing::info!("User {} registered", user.id);
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_not_found(USER_NOT_FOUND)
    }

    async fn update_user(&self, id: Uuid, update: UpdateUser) -> AppResult<User> {
        let users = self.uow.users();
        let mut user = users.find_by_id(id).await?.ok_or_not_found(USER_NOT_FOUND)?;

        user.modify_info(update);
        users.update(user).await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<bool> {
        let users = self.uow.users();
        users.find_by_id(id).await?.ok_or_not_found(USER_NOT_FOUND)?;

        users.delete(id).await?;
        tracing::info!("User {} deleted", id);
        Ok(true)
    }
}
