use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000003_create_order_table::Orders;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on game_id: items outlive catalog deletions.
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(integer(OrderItem::OrderId))
                    .col(integer(OrderItem::GameId))
                    .col(string(OrderItem::Title))
                    .col(double(OrderItem::Price))
                    .col(string_null(OrderItem::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_order_id")
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItem {
    Table,
    Id,
    OrderId,
    GameId,
    Title,
    Price,
    Image,
}
