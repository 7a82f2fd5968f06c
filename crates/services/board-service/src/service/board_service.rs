//! Board service - orchestrates the board aggregate against persistence.
//!
//! Every mutation is a read-modify-write of the whole aggregate: load the
//! board, apply the change through the domain methods, save it back. All
//! lookups happen before the first write, so a missing board or user aborts
//! the operation without touching the store.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    Board, Comment, CreateBoard, CreateComment, UpdateBoard, UpdateComment, BOARD_NOT_FOUND,
    USER_NOT_FOUND,
};

use crate::repository::UnitOfWork;

/// Board service trait for dependency injection.
#[async_trait]
pub trait BoardService: Send + Sync {
    /// Create a board owned by an existing user
    async fn create_board(&self, data: CreateBoard) -> AppResult<Board>;

    /// Get a board with its comments
    async fn get_board(&self, id: Uuid) -> AppResult<Board>;

    /// All boards
    async fn list_boards(&self) -> AppResult<Vec<Board>>;

    /// Overwrite the fields present in `update`
    async fn update_board(&self, id: Uuid, update: UpdateBoard) -> AppResult<Board>;

    /// Delete a board and its comments; `true` once removed
    async fn delete_board(&self, id: Uuid) -> AppResult<bool>;

    /// Append a comment and return it as persisted
    async fn add_comment(&self, board_id: Uuid, data: CreateComment) -> AppResult<Comment>;

    /// Edit a comment and return it as persisted.
    ///
    /// The edited comment is returned, not the last one in the list.
    async fn update_comment(
        &self,
        board_id: Uuid,
        comment_id: Uuid,
        update: UpdateComment,
    ) -> AppResult<Comment>;

    /// Add one like
    async fn like_board(&self, id: Uuid) -> AppResult<Board>;

    /// Add one dislike
    async fn dislike_board(&self, id: Uuid) -> AppResult<Board>;
}

/// Concrete implementation of BoardService using Unit of Work.
pub struct BoardManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BoardManager<U> {
    /// Create new board service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn load(&self, id: Uuid) -> AppResult<Board> {
        self.uow
            .boards()
            .find_by_id(id)
            .await?
            .ok_or_not_found(BOARD_NOT_FOUND)
    }
}

#[async_trait]
impl<U: UnitOfWork> BoardService for BoardManager<U> {
    async fn create_board(&self, data: CreateBoard) -> AppResult<Board> {
        self.uow
            .users()
            .find_by_id(data.user_id)
            .await?
            .ok_or_not_found(USER_NOT_FOUND)?;

        let board = self.uow.boards().save(Board::new(Uuid::new_v4(), data)).await?;
        tracing::info!("Board {} created", board.id);
        Ok(board)
    }

    async fn get_board(&self, id: Uuid) -> AppResult<Board> {
        self.load(id).await
    }

    async fn list_boards(&self) -> AppResult<Vec<Board>> {
        self.uow.boards().find_all().await
    }

    async fn update_board(&self, id: Uuid, update: UpdateBoard) -> AppResult<Board> {
        let mut board = self.load(id).await?;

        board.apply_update(update);
        self.uow.boards().save(board).await
    }

    async fn delete_board(&self, id: Uuid) -> AppResult<bool> {
        let board = self.load(id).await?;

        self.uow.boards().delete(&board).await?;
        tracing::info!("Board {} deleted with {} comments", id, board.comments.len());
        Ok(true)
    }

    async fn add_comment(&self, board_id: Uuid, data: CreateComment) -> AppResult<Comment> {
        let mut board = self.load(board_id).await?;
        let user = self
            .uow
            .users()
            .find_by_id(data.user_id)
            .await?
            .ok_or_not_found(USER_NOT_FOUND)?;

        board.add_comment(Comment::new(data.content, user.username));
        let saved = self.uow.boards().save(board).await?;

        saved
            .find_last_comment()
            .cloned()
            .ok_or_else(|| AppError::internal(format!("board {} saved without comments", board_id)))
    }

    async fn update_comment(
        &self,
        board_id: Uuid,
        comment_id: Uuid,
        update: UpdateComment,
    ) -> AppResult<Comment> {
        let mut board = self.load(board_id).await?;

        board.edit_comment(comment_id, update)?;
        let saved = self.uow.boards().save(board).await?;

        Ok(saved.find_comment(comment_id)?.clone())
    }

    async fn like_board(&self, id: Uuid) -> AppResult<Board> {
        let mut board = self.load(id).await?;

        board.like();
        self.uow.boards().save(board).await
    }

    async fn dislike_board(&self, id: Uuid) -> AppResult<Board> {
        let mut board = self.load(id).await?;

        board.dislike();
        self.uow.boards().save(board).await
    }
}
