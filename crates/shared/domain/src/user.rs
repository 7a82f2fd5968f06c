//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Stored as given at registration
    #[serde(skip_serializing)]
    pub password: String,
    pub birth: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from registration data
    pub fn new(id: Uuid, data: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: data.username,
            email: data.email,
            password: data.password,
            birth: data.birth,
            phone_number: data.phone_number,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a password / phone number change.
    ///
    /// Fields absent from the update keep their current value.
    pub fn modify_info(&mut self, update: UpdateUser) {
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(phone_number) = update.phone_number {
            self.phone_number = phone_number;
        }
        self.updated_at = Utc::now();
    }
}

/// User registration data
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub birth: String,
    pub phone_number: String,
}

/// User update data; only password and phone number are mutable
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub password: Option<String>,
    pub phone_number: Option<String>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub birth: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            birth: user.birth,
            phone_number: user.phone_number,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self::from(user.clone())
    }
}
