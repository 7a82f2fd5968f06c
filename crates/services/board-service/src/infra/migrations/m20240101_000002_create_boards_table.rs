//! Migration: Create boards table.
//!
//! `user_id` is not a foreign key; boards stay when their owner is deleted.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Boards::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Boards::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Boards::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Boards::Content).text().not_null())
                    .col(ColumnDef::new(Boards::Author).string().not_null())
                    .col(ColumnDef::new(Boards::Genre).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Boards::Likes)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Boards::Dislikes)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Boards::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Boards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Boards::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_boards_user_id")
                    .table(Boards::Table)
                    .col(Boards::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Boards::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Boards {
    Table,
    Id,
    Title,
    Content,
    Author,
    Genre,
    Likes,
    Dislikes,
    UserId,
    CreatedAt,
    UpdatedAt,
}
