use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommandLog::Table)
                    .if_not_exists()
                    .col(pk_auto(CommandLog::Id))
                    .col(string(CommandLog::Command))
                    .col(text(CommandLog::Response))
                    .col(timestamp(CommandLog::ExecutedAt))
                    .to_owned(),
            )
            .await?;

        // Index for newest-first retrieval and trim scans
        manager
            .create_index(
                Index::create()
                    .name("idx_command_log_executed_at")
                    .table(CommandLog::Table)
                    .col(CommandLog::ExecutedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_command_log_executed_at")
                    .table(CommandLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CommandLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommandLog {
    Table,
    Id,
    Command,
    Response,
    ExecutedAt,
}
