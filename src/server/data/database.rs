//! Durable storage backend over SeaORM.
//!
//! Entity models stay inside this module; everything returned crosses the
//! boundary as domain models. Upserts use `ON CONFLICT` so topology sync and
//! replayed gateway events are absorbed without read-then-write races.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::data::{
    Storage, StorageError, BYTES_PER_MESSAGE, COMMAND_LOG_CAP, RETENTION_DAYS, STATUS_ROW_ID,
};
use crate::server::model::{
    BotStatus, BotStatusUpdate, Channel, CommandLog, CreateCommandLogParam, CreateMessageParam,
    Message, MessagePage, MessageQuery, Server, UpsertChannelParam, UpsertServerParam,
};

pub struct DatabaseStorage {
    db: DatabaseConnection,
}

impl DatabaseStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the singleton status row, inserting the first-boot row if it
    /// does not exist yet. Concurrent first-boot inserts collapse into one
    /// row via `ON CONFLICT DO NOTHING`.
    async fn ensure_status_row(&self) -> Result<entity::bot_status::Model, DbErr> {
        if let Some(row) = entity::prelude::BotStatus::find_by_id(STATUS_ROW_ID)
            .one(&self.db)
            .await?
        {
            return Ok(row);
        }

        let initial = BotStatus::initial();
        let _ = entity::prelude::BotStatus::insert(entity::bot_status::ActiveModel {
            id: ActiveValue::Set(STATUS_ROW_ID),
            is_online: ActiveValue::Set(initial.is_online),
            uptime_started: ActiveValue::Set(initial.uptime_started),
            servers_count: ActiveValue::Set(initial.servers_count),
            channels_count: ActiveValue::Set(initial.channels_count),
            messages_count: ActiveValue::Set(initial.messages_count),
            storage_usage: ActiveValue::Set(initial.storage_usage),
        })
        .on_conflict(
            OnConflict::column(entity::bot_status::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(&self.db)
        .await?;

        entity::prelude::BotStatus::find_by_id(STATUS_ROW_ID)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("bot_status singleton row".to_string()))
    }

    async fn refresh_server_count(&self) -> Result<(), StorageError> {
        let count = entity::prelude::Server::find().count(&self.db).await? as i64;
        self.update_bot_status(BotStatusUpdate {
            servers_count: Some(count),
            ..Default::default()
        })
        .await?;
        Ok(())
    }

    async fn refresh_channel_count(&self) -> Result<(), StorageError> {
        let count = entity::prelude::Channel::find().count(&self.db).await? as i64;
        self.update_bot_status(BotStatusUpdate {
            channels_count: Some(count),
            ..Default::default()
        })
        .await?;
        Ok(())
    }

    /// Recomputes `messages_count` and the storage estimate derived from it.
    async fn refresh_message_counters(&self) -> Result<(), StorageError> {
        let count = entity::prelude::Message::find().count(&self.db).await? as i64;
        self.update_bot_status(BotStatusUpdate {
            messages_count: Some(count),
            storage_usage: Some(count * BYTES_PER_MESSAGE),
            ..Default::default()
        })
        .await?;
        Ok(())
    }

    /// Drops the oldest entries once the log exceeds its cap.
    async fn trim_command_logs(&self) -> Result<(), DbErr> {
        let count = entity::prelude::CommandLog::find().count(&self.db).await?;
        if count <= COMMAND_LOG_CAP {
            return Ok(());
        }

        let stale: Vec<i32> = entity::prelude::CommandLog::find()
            .order_by_asc(entity::command_log::Column::ExecutedAt)
            .order_by_asc(entity::command_log::Column::Id)
            .limit(count - COMMAND_LOG_CAP)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|entry| entry.id)
            .collect();

        entity::prelude::CommandLog::delete_many()
            .filter(entity::command_log::Column::Id.is_in(stale))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn upsert_server(&self, param: UpsertServerParam) -> Result<Server, StorageError> {
        let model = entity::prelude::Server::insert(entity::server::ActiveModel {
            id: ActiveValue::Set(param.id),
            name: ActiveValue::Set(param.name),
            icon: ActiveValue::Set(param.icon),
            joined_at: ActiveValue::Set(param.joined_at),
        })
        .on_conflict(
            OnConflict::column(entity::server::Column::Id)
                .update_columns([
                    entity::server::Column::Name,
                    entity::server::Column::Icon,
                ])
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await?;

        self.refresh_server_count().await?;

        Ok(Server::from_entity(model))
    }

    async fn get_servers(&self) -> Result<Vec<Server>, StorageError> {
        let servers = entity::prelude::Server::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(Server::from_entity)
            .collect();

        Ok(servers)
    }

    async fn get_server(&self, id: &str) -> Result<Option<Server>, StorageError> {
        let server = entity::prelude::Server::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Server::from_entity);

        Ok(server)
    }

    async fn upsert_channel(&self, param: UpsertChannelParam) -> Result<Channel, StorageError> {
        let model = entity::prelude::Channel::insert(entity::channel::ActiveModel {
            id: ActiveValue::Set(param.id),
            server_id: ActiveValue::Set(param.server_id),
            name: ActiveValue::Set(param.name),
            kind: ActiveValue::Set(param.kind),
        })
        .on_conflict(
            OnConflict::column(entity::channel::Column::Id)
                .update_columns([
                    entity::channel::Column::Name,
                    entity::channel::Column::Kind,
                ])
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await?;

        self.refresh_channel_count().await?;

        Ok(Channel::from_entity(model))
    }

    async fn get_channels(&self, server_id: Option<&str>) -> Result<Vec<Channel>, StorageError> {
        let mut select = entity::prelude::Channel::find();
        if let Some(server_id) = server_id {
            select = select.filter(entity::channel::Column::ServerId.eq(server_id));
        }

        let channels = select
            .all(&self.db)
            .await?
            .into_iter()
            .map(Channel::from_entity)
            .collect();

        Ok(channels)
    }

    async fn create_message(&self, param: CreateMessageParam) -> Result<Message, StorageError> {
        // Idempotent path: the first stored version of a message wins, even
        // when the transport redelivers it with different content.
        if let Some(existing) = entity::prelude::Message::find_by_id(param.id.as_str())
            .one(&self.db)
            .await?
        {
            return Ok(Message::from_entity(existing));
        }

        // DO NOTHING absorbs the race where a duplicate lands between the
        // check above and this insert.
        let _ = entity::prelude::Message::insert(entity::message::ActiveModel {
            id: ActiveValue::Set(param.id.clone()),
            server_id: ActiveValue::Set(param.server_id),
            channel_id: ActiveValue::Set(param.channel_id),
            author_id: ActiveValue::Set(param.author_id),
            author_username: ActiveValue::Set(param.author_username),
            author_discriminator: ActiveValue::Set(param.author_discriminator),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(param.created_at),
        })
        .on_conflict(
            OnConflict::column(entity::message::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(&self.db)
        .await?;

        let stored = entity::prelude::Message::find_by_id(param.id.as_str())
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("message {}", param.id)))?;

        self.refresh_message_counters().await?;

        Ok(Message::from_entity(stored))
    }

    async fn get_messages(&self, query: MessageQuery) -> Result<MessagePage, StorageError> {
        let mut select = entity::prelude::Message::find();

        if let Some(server_id) = query.server_id.as_deref() {
            select = select.filter(entity::message::Column::ServerId.eq(server_id));
        }
        if let Some(channel_id) = query.channel_id.as_deref() {
            select = select.filter(entity::message::Column::ChannelId.eq(channel_id));
        }
        if let Some(search) = query.search.as_deref() {
            // SQLite LIKE is case-insensitive for ASCII
            select = select.filter(
                Condition::any()
                    .add(entity::message::Column::Content.contains(search))
                    .add(entity::message::Column::AuthorUsername.contains(search)),
            );
        }

        let total = select.clone().count(&self.db).await?;

        let messages = select
            .order_by_desc(entity::message::Column::CreatedAt)
            .offset(query.offset)
            .limit(query.limit)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Message::from_entity)
            .collect();

        Ok(MessagePage { messages, total })
    }

    async fn oldest_message_at(&self) -> Result<Option<DateTime<Utc>>, StorageError> {
        let oldest = entity::prelude::Message::find()
            .order_by_asc(entity::message::Column::CreatedAt)
            .one(&self.db)
            .await?
            .map(|m| m.created_at);

        Ok(oldest)
    }

    async fn delete_old_messages(&self) -> Result<u64, StorageError> {
        let cutoff = Utc::now() - Duration::days(RETENTION_DAYS);

        let result = entity::prelude::Message::delete_many()
            .filter(entity::message::Column::CreatedAt.lt(cutoff))
            .exec(&self.db)
            .await?;

        self.refresh_message_counters().await?;

        Ok(result.rows_affected)
    }

    async fn get_bot_status(&self) -> Result<BotStatus, StorageError> {
        let row = self.ensure_status_row().await?;

        Ok(BotStatus::from_entity(row))
    }

    async fn update_bot_status(&self, update: BotStatusUpdate) -> Result<BotStatus, StorageError> {
        let row = self.ensure_status_row().await?;
        let mut active: entity::bot_status::ActiveModel = row.clone().into();

        let mut dirty = false;
        if let Some(is_online) = update.is_online {
            active.is_online = ActiveValue::Set(is_online);
            dirty = true;
        }
        if let Some(uptime_started) = update.uptime_started {
            active.uptime_started = ActiveValue::Set(uptime_started);
            dirty = true;
        }
        if let Some(servers_count) = update.servers_count {
            active.servers_count = ActiveValue::Set(servers_count);
            dirty = true;
        }
        if let Some(channels_count) = update.channels_count {
            active.channels_count = ActiveValue::Set(channels_count);
            dirty = true;
        }
        if let Some(messages_count) = update.messages_count {
            active.messages_count = ActiveValue::Set(messages_count);
            dirty = true;
        }
        if let Some(storage_usage) = update.storage_usage {
            active.storage_usage = ActiveValue::Set(storage_usage);
            dirty = true;
        }

        if !dirty {
            return Ok(BotStatus::from_entity(row));
        }

        let updated = active.update(&self.db).await?;

        Ok(BotStatus::from_entity(updated))
    }

    async fn create_command_log(
        &self,
        param: CreateCommandLogParam,
    ) -> Result<CommandLog, StorageError> {
        let inserted = entity::command_log::ActiveModel {
            command: ActiveValue::Set(param.command),
            response: ActiveValue::Set(param.response),
            executed_at: ActiveValue::Set(param.executed_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        self.trim_command_logs().await?;

        Ok(CommandLog::from_entity(inserted))
    }

    async fn get_command_logs(&self, limit: u64) -> Result<Vec<CommandLog>, StorageError> {
        let logs = entity::prelude::CommandLog::find()
            .order_by_desc(entity::command_log::Column::ExecutedAt)
            .order_by_desc(entity::command_log::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?
            .into_iter()
            .map(CommandLog::from_entity)
            .collect();

        Ok(logs)
    }
}
