//! Board aggregate: a post together with the comments it owns.
//!
//! The board is loaded, mutated in memory and saved back as a whole. All
//! mutation goes through the methods below so the aggregate's invariants
//! hold regardless of which service drives it:
//!
//! - `likes` / `dislikes` never go below zero and are untouched by
//!   [`Board::apply_update`].
//! - comments are append-only and keep insertion order; the last element of
//!   [`Board::comments`] is always the most recently added comment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::comment::{Comment, CommentResponse, UpdateComment};
use crate::constants::COMMENT_NOT_FOUND;
use crate::error::{DomainError, DomainResult};
use crate::genre::Genre;

/// Board domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Free-text author name, not linked to `user_id`
    pub author: String,
    pub genre: Genre,
    pub likes: u64,
    pub dislikes: u64,
    /// Owning user
    pub user_id: Uuid,
    /// Comments in insertion order
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Create a new board with zeroed counters and no comments
    pub fn new(id: Uuid, data: CreateBoard) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: data.title,
            content: data.content,
            author: data.author,
            genre: data.genre,
            likes: 0,
            dislikes: 0,
            user_id: data.user_id,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every field present in `update`; absent fields are kept.
    ///
    /// An explicit empty string is a present value and does overwrite.
    pub fn apply_update(&mut self, update: UpdateBoard) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(genre) = update.genre {
            self.genre = genre;
        }
        self.updated_at = Utc::now();
    }

    /// Append a comment at the end of the list and return it
    pub fn add_comment(&mut self, comment: Comment) -> &Comment {
        self.comments.push(comment);
        self.updated_at = Utc::now();
        // just pushed, so the list is non-empty
        &self.comments[self.comments.len() - 1]
    }

    /// Most recently added comment
    pub fn find_last_comment(&self) -> Option<&Comment> {
        self.comments.last()
    }

    /// Look up a comment of this board by id
    pub fn find_comment(&self, comment_id: Uuid) -> DomainResult<&Comment> {
        self.comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .ok_or_else(|| DomainError::not_found(COMMENT_NOT_FOUND))
    }

    /// Edit a comment in place.
    ///
    /// Fails with a comment-not-found error before touching anything if the
    /// id does not belong to this board. Position in the list is unchanged.
    pub fn edit_comment(
        &mut self,
        comment_id: Uuid,
        update: UpdateComment,
    ) -> DomainResult<&Comment> {
        let comment = self
            .comments
            .iter_mut()
            .find(|comment| comment.id == comment_id)
            .ok_or_else(|| DomainError::not_found(COMMENT_NOT_FOUND))?;

        comment.edit(update);
        self.updated_at = Utc::now();
        Ok(comment)
    }

    /// Register one like
    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
        self.updated_at = Utc::now();
    }

    /// Register one dislike
    pub fn dislike(&mut self) {
        self.dislikes = self.dislikes.saturating_add(1);
        self.updated_at = Utc::now();
    }
}

/// Board creation data
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoard {
    pub title: String,
    pub content: String,
    pub author: String,
    pub genre: Genre,
    pub user_id: Uuid,
}

/// Partial board update; `None` means "leave unchanged"
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBoard {
    pub title: Option<String>,
    pub content: Option<String>,
    pub genre: Option<Genre>,
}

/// Board summary returned by create, update and list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub likes: u64,
    pub dislikes: u64,
    pub genre: Genre,
}

impl From<&Board> for BoardResponse {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id,
            title: board.title.clone(),
            content: board.content.clone(),
            author: board.author.clone(),
            likes: board.likes,
            dislikes: board.dislikes,
            genre: board.genre,
        }
    }
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self::from(&board)
    }
}

/// Board with its comments, returned by single-board lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BoardDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub likes: u64,
    pub dislikes: u64,
    pub genre: Genre,
    pub user_id: Uuid,
    pub comments: Vec<CommentResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<Board> for BoardDetailResponse {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            title: board.title,
            content: board.content,
            author: board.author,
            likes: board.likes,
            dislikes: board.dislikes,
            genre: board.genre,
            user_id: board.user_id,
            comments: board.comments.into_iter().map(CommentResponse::from).collect(),
            created_at: board.created_at,
        }
    }
}
