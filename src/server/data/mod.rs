//! Storage contract for all domain entities.
//!
//! The `Storage` trait is the single repository boundary the rest of the
//! application depends on: ingestion, the retention sweep, command execution,
//! and the query API all go through it. Two backends satisfy identical
//! semantics — `DatabaseStorage` (SeaORM over SQLite) and `MemoryStorage`
//! (in-process maps) — selected once at startup.
//!
//! Contract highlights:
//! - message insert is idempotent: an existing id returns the stored record
//!   unchanged, including under duplicate redelivery and insert races
//! - the derived counters on the status row are recomputed before any
//!   mutating call returns
//! - absence is `Ok(None)`, never an error

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::server::model::{
    BotStatus, BotStatusUpdate, Channel, CommandLog, CreateCommandLogParam, CreateMessageParam,
    Message, MessagePage, MessageQuery, Server, UpsertChannelParam, UpsertServerParam,
};

pub mod database;
pub mod memory;

#[cfg(test)]
mod test;

pub use database::DatabaseStorage;
pub use memory::MemoryStorage;

/// Age threshold beyond which messages are purged.
pub const RETENTION_DAYS: i64 = 14;

/// Newest command-log entries kept after each insert.
pub const COMMAND_LOG_CAP: u64 = 1000;

/// Flat per-message estimate used for the derived storage-usage counter.
pub const BYTES_PER_MESSAGE: i64 = 512;

/// Primary key of the singleton status row.
pub const STATUS_ROW_ID: i32 = 1;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

#[async_trait]
pub trait Storage: Send + Sync {
    /// Upserts a server record: inserts when the id is new, otherwise updates
    /// the mutable fields (name, icon) in place. Recomputes `servers_count`.
    async fn upsert_server(&self, param: UpsertServerParam) -> Result<Server, StorageError>;

    async fn get_servers(&self) -> Result<Vec<Server>, StorageError>;

    async fn get_server(&self, id: &str) -> Result<Option<Server>, StorageError>;

    /// Upserts a channel record: inserts when the id is new, otherwise updates
    /// the mutable fields (name, type) in place. Recomputes `channels_count`.
    async fn upsert_channel(&self, param: UpsertChannelParam) -> Result<Channel, StorageError>;

    /// Lists channels, optionally restricted to one server.
    async fn get_channels(&self, server_id: Option<&str>) -> Result<Vec<Channel>, StorageError>;

    /// Idempotent insert: if the id is already present the stored record is
    /// returned unchanged and nothing is written. Otherwise inserts and
    /// recomputes `messages_count` / `storage_usage`.
    async fn create_message(&self, param: CreateMessageParam) -> Result<Message, StorageError>;

    /// Filtered, paginated lookup ordered by `created_at` descending.
    /// Returns the page plus the pre-pagination total.
    async fn get_messages(&self, query: MessageQuery) -> Result<MessagePage, StorageError>;

    /// Timestamp of the oldest archived message, if any.
    async fn oldest_message_at(&self) -> Result<Option<DateTime<Utc>>, StorageError>;

    /// Deletes every message strictly older than now minus the retention
    /// window. Returns the number deleted and recomputes the counters.
    async fn delete_old_messages(&self) -> Result<u64, StorageError>;

    /// Returns the singleton status row, creating it on first access.
    async fn get_bot_status(&self) -> Result<BotStatus, StorageError>;

    /// Merges the supplied fields into the status row and returns the result.
    /// The read-modify-write happens inside the storage boundary.
    async fn update_bot_status(&self, update: BotStatusUpdate) -> Result<BotStatus, StorageError>;

    /// Appends a command-log entry, then trims the collection to the newest
    /// `COMMAND_LOG_CAP` entries.
    async fn create_command_log(
        &self,
        param: CreateCommandLogParam,
    ) -> Result<CommandLog, StorageError>;

    /// Newest-first retrieval; ties on `executed_at` break by insertion order.
    async fn get_command_logs(&self, limit: u64) -> Result<Vec<CommandLog>, StorageError>;
}
