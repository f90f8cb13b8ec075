use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BotStatus::Table)
                    .if_not_exists()
                    .col(integer(BotStatus::Id).primary_key())
                    .col(boolean(BotStatus::IsOnline))
                    .col(timestamp_null(BotStatus::UptimeStarted))
                    .col(big_integer(BotStatus::ServersCount))
                    .col(big_integer(BotStatus::ChannelsCount))
                    .col(big_integer(BotStatus::MessagesCount))
                    .col(big_integer(BotStatus::StorageUsage))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BotStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BotStatus {
    Table,
    Id,
    IsOnline,
    UptimeStarted,
    ServersCount,
    ChannelsCount,
    MessagesCount,
    StorageUsage,
}
