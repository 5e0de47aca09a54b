use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string_len(Game::Title, 100))
                    .col(text(Game::Description))
                    .col(string_len(Game::TitleFolded, 400))
                    .col(text(Game::DescriptionFolded))
                    .col(double(Game::Price))
                    .col(string_len(Game::Genre, 32))
                    .col(string(Game::Image))
                    .col(string(Game::DownloadUrl).default(""))
                    .col(integer(Game::CreatedBy))
                    .col(integer(Game::Stock).default(999))
                    .col(double(Game::Rating).default(0.0))
                    .col(
                        timestamp_with_time_zone(Game::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Game::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_created_by")
                            .from(Game::Table, Game::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_title")
                    .table(Game::Table)
                    .col(Game::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Title,
    Description,
    TitleFolded,
    DescriptionFolded,
    Price,
    Genre,
    Image,
    DownloadUrl,
    CreatedBy,
    Stock,
    Rating,
    CreatedAt,
    UpdatedAt,
}
