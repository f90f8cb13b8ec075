mod command_log;
mod create_message;
mod delete_old_messages;
mod get_messages;
mod memory;
mod upsert_channel;
mod upsert_server;

use super::{
    DatabaseStorage, MemoryStorage, Storage, StorageError, BYTES_PER_MESSAGE, COMMAND_LOG_CAP,
    RETENTION_DAYS,
};
use crate::server::model::{
    BotStatusUpdate, CreateCommandLogParam, CreateMessageParam, MessageQuery, UpsertChannelParam,
    UpsertServerParam,
};
use chrono::{Duration, Utc};
use test_utils::builder::TestBuilder;

/// Builds a database-backed storage over a fresh in-memory SQLite schema,
/// returning the raw connection alongside for factory seeding.
async fn database_storage() -> (DatabaseStorage, sea_orm::DatabaseConnection) {
    let test = TestBuilder::new()
        .with_archive_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();

    (DatabaseStorage::new(db.clone()), db)
}

fn server_param(id: &str, name: &str) -> UpsertServerParam {
    UpsertServerParam {
        id: id.to_string(),
        name: name.to_string(),
        icon: None,
        joined_at: Utc::now(),
    }
}

fn channel_param(id: &str, server_id: &str, name: &str) -> UpsertChannelParam {
    UpsertChannelParam {
        id: id.to_string(),
        server_id: server_id.to_string(),
        name: name.to_string(),
        kind: "text".to_string(),
    }
}

fn message_param(id: &str, server_id: &str, channel_id: &str, content: &str) -> CreateMessageParam {
    CreateMessageParam {
        id: id.to_string(),
        server_id: server_id.to_string(),
        channel_id: channel_id.to_string(),
        author_id: format!("9{id}"),
        author_username: format!("user-{id}"),
        author_discriminator: None,
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

fn log_param(command: &str, executed_at: chrono::DateTime<Utc>) -> CreateCommandLogParam {
    CreateCommandLogParam {
        command: command.to_string(),
        response: format!("response to {command}"),
        executed_at,
    }
}
