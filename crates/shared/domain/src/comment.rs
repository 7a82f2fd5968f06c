//! Comment entity, owned by a [`Board`](crate::Board).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reply attached to a board.
///
/// `username` is a snapshot of the author's username taken when the comment
/// was written, not a live reference to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with a freshly generated id
    pub fn new(content: String, username: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            content,
            username,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the content if the update carries one
    pub fn edit(&mut self, update: UpdateComment) {
        if let Some(content) = update.content {
            self.content = content;
            self.updated_at = Utc::now();
        }
    }
}

/// Comment creation data
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub content: String,
    /// Author; resolved against the user store for the username snapshot
    pub user_id: Uuid,
}

/// Comment update data
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateComment {
    pub content: Option<String>,
}

/// Comment response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content.clone(),
            username: comment.username.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            username: comment.username,
            created_at: comment.created_at,
        }
    }
}
