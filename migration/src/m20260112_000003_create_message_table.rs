use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign keys here: messages can arrive before topology sync has
        // upserted their channel, and must never be lost to a constraint.
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(string(Message::Id).primary_key())
                    .col(string(Message::ServerId))
                    .col(string(Message::ChannelId))
                    .col(string(Message::AuthorId))
                    .col(string(Message::AuthorUsername))
                    .col(string_null(Message::AuthorDiscriminator))
                    .col(text(Message::Content))
                    .col(timestamp(Message::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Index for per-server and per-channel filtered queries
        manager
            .create_index(
                Index::create()
                    .name("idx_message_server_id")
                    .table(Message::Table)
                    .col(Message::ServerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_message_channel_id")
                    .table(Message::Table)
                    .col(Message::ChannelId)
                    .to_owned(),
            )
            .await?;

        // Index for newest-first ordering and the retention cutoff scan
        manager
            .create_index(
                Index::create()
                    .name("idx_message_created_at")
                    .table(Message::Table)
                    .col(Message::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_message_created_at")
                    .table(Message::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_message_channel_id")
                    .table(Message::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_message_server_id")
                    .table(Message::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    Table,
    Id,
    ServerId,
    ChannelId,
    AuthorId,
    AuthorUsername,
    AuthorDiscriminator,
    Content,
    CreatedAt,
}
