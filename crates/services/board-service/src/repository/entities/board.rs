//! Board database entity for SeaORM.

use sea_orm::entity::prelude::*;

use common::{AppError, AppResult};
use domain::{Board, Comment, Genre};

use super::comment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "boards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    /// Genre storage name, e.g. `SF_FANTASY`
    pub genre: String,
    pub likes: i64,
    pub dislikes: i64,
    pub user_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
}

impl Related<comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Assemble the domain aggregate from a board row and its comment rows.
    ///
    /// `comments` are sorted by position here, so callers may pass them in
    /// any order.
    pub fn into_domain(self, mut comments: Vec<comment::Model>) -> AppResult<Board> {
        comments.sort_by_key(|c| c.position);

        let genre = self.genre.parse::<Genre>().unwrap_or_else(|_| {
            tracing::warn!(
                "Board {} has unknown genre {:?}, using {}",
                self.id,
                self.genre,
                Genre::default()
            );
            Genre::default()
        });

        Ok(Board {
            id: self.id,
            title: self.title,
            content: self.content,
            author: self.author,
            genre,
            likes: counter(self.likes, "likes", self.id)?,
            dislikes: counter(self.dislikes, "dislikes", self.id)?,
            user_id: self.user_id,
            comments: comments.into_iter().map(Comment::from).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn counter(value: i64, column: &str, board_id: Uuid) -> AppResult<u64> {
    u64::try_from(value)
        .map_err(|_| AppError::internal(format!("negative {} on board {}", column, board_id)))
}
