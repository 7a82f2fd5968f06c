//! Board repository: loads and stores the board aggregate with its comments.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::entities::board::{self, Entity as BoardEntity};
use super::entities::comment::{self, Entity as CommentEntity};
use common::{AppError, AppResult};
use domain::{Board, BOARD_NOT_FOUND};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Board repository trait for dependency injection.
///
/// Boards are always read and written as a whole aggregate; comments have no
/// repository of their own.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Find a board with its comments in insertion order
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Board>>;

    /// All boards, oldest first
    async fn find_all(&self) -> AppResult<Vec<Board>>;

    /// Insert or replace the board and its comment list, returning the
    /// reloaded aggregate
    async fn save(&self, board: Board) -> AppResult<Board>;

    /// Delete the board; its comments go with it
    async fn delete(&self, board: &Board) -> AppResult<()>;
}

/// Concrete implementation of BoardRepository
pub struct BoardStore {
    db: DatabaseConnection,
}

impl BoardStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_board(board: &Board) -> AppResult<board::ActiveModel> {
    Ok(board::ActiveModel {
        id: Set(board.id),
        title: Set(board.title.clone()),
        content: Set(board.content.clone()),
        author: Set(board.author.clone()),
        genre: Set(board.genre.to_string()),
        likes: Set(to_column(board.likes)?),
        dislikes: Set(to_column(board.dislikes)?),
        user_id: Set(board.user_id),
        created_at: Set(board.created_at),
        updated_at: Set(board.updated_at),
    })
}

fn to_column(counter: u64) -> AppResult<i64> {
    i64::try_from(counter).map_err(|_| AppError::internal("counter exceeds column range"))
}

#[async_trait]
impl BoardRepository for BoardStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Board>> {
        let Some(model) = BoardEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let comments = CommentEntity::find()
            .filter(comment::Column::BoardId.eq(id))
            .order_by_asc(comment::Column::Position)
            .all(&self.db)
            .await?;

        model.into_domain(comments).map(Some)
    }

    async fn find_all(&self) -> AppResult<Vec<Board>> {
        let boards = BoardEntity::find()
            .order_by_asc(board::Column::CreatedAt)
            .all(&self.db)
            .await?;
        let comments = boards.load_many(CommentEntity, &self.db).await?;

        boards
            .into_iter()
            .zip(comments)
            .map(|(board, comments)| board.into_domain(comments))
            .collect()
    }

    async fn save(&self, board: Board) -> AppResult<Board> {
        let txn = self.db.begin().await?;

        BoardEntity::insert(to_active_board(&board)?)
            .on_conflict(
                OnConflict::column(board::Column::Id)
                    .update_columns([
                        board::Column::Title,
                        board::Column::Content,
                        board::Column::Author,
                        board::Column::Genre,
                        board::Column::Likes,
                        board::Column::Dislikes,
                        board::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        // Comments are never deleted individually, but the stored list must
        // mirror the aggregate exactly.
        let kept: Vec<Uuid> = board.comments.iter().map(|c| c.id).collect();
        CommentEntity::delete_many()
            .filter(comment::Column::BoardId.eq(board.id))
            .filter(comment::Column::Id.is_not_in(kept))
            .exec(&txn)
            .await?;

        for (index, item) in board.comments.iter().enumerate() {
            let position = i32::try_from(index)
                .map_err(|_| AppError::internal("too many comments on one board"))?;

            CommentEntity::insert(comment::ActiveModel {
                id: Set(item.id),
                board_id: Set(board.id),
                position: Set(position),
                content: Set(item.content.clone()),
                username: Set(item.username.clone()),
                created_at: Set(item.created_at),
                updated_at: Set(item.updated_at),
            })
            .on_conflict(
                OnConflict::column(comment::Column::Id)
                    .update_columns([
                        comment::Column::Position,
                        comment::Column::Content,
                        comment::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        }

        txn.commit().await?;
        tracing::debug!("Saved board {} with {} comments", board.id, board.comments.len());

        self.find_by_id(board.id)
            .await?
            .ok_or_else(|| AppError::internal(format!("board {} missing after save", board.id)))
    }

    async fn delete(&self, board: &Board) -> AppResult<()> {
        let result = BoardEntity::delete_by_id(board.id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(BOARD_NOT_FOUND));
        }

        Ok(())
    }
}
