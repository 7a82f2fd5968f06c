//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use super::entities::user::{ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{CreateUser, User, USER_NOT_FOUND};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Create a new user
    async fn create(&self, data: CreateUser) -> AppResult<User>;

    /// Persist the mutable fields of an existing user
    async fn update(&self, user: User) -> AppResult<User>;

    /// Delete user by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, data: CreateUser) -> AppResult<User> {
        let user = User::new(Uuid::new_v4(), data);
        let active_model = ActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            email: Set(user.email),
            password: Set(user.password),
            birth: Set(user.birth),
            phone_number: Set(user.phone_number),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let existing = UserEntity::find_by_id(user.id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        let mut active: ActiveModel = existing.into();
        active.password = Set(user.password);
        active.phone_number = Set(user.phone_number);
        active.updated_at = Set(user.updated_at);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }

        Ok(())
    }
}
