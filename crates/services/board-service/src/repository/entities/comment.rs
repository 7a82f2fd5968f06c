//! Comment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Comment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub board_id: Uuid,
    /// Zero-based index in the board's comment list
    pub position: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub username: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::board::Entity",
        from = "Column::BoardId",
        to = "super::board::Column::Id",
        on_delete = "Cascade"
    )]
    Board,
}

impl Related<super::board::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Board.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Comment {
            id: model.id,
            content: model.content,
            username: model.username,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
