use sea_orm_migration::{prelude::*, schema::*};

use super::m20260112_000001_create_server_table::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Channel::Table)
                    .if_not_exists()
                    .col(string(Channel::Id).primary_key())
                    .col(string(Channel::ServerId))
                    .col(string(Channel::Name))
                    .col(string(Channel::Type))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channel_server_id")
                            .from(Channel::Table, Channel::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_channel_server_id")
                    .table(Channel::Table)
                    .col(Channel::ServerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_channel_server_id")
                    .table(Channel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Channel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Channel {
    Table,
    Id,
    ServerId,
    Name,
    Type,
}
