//! In-process storage backend.
//!
//! Satisfies the same contract as the database backend with plain maps behind
//! one async lock. Every mutating operation recomputes the derived counters
//! before releasing the write guard, so concurrent readers observe either the
//! pre- or post-operation state, never a half-applied one.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::server::data::{
    Storage, StorageError, BYTES_PER_MESSAGE, COMMAND_LOG_CAP, RETENTION_DAYS,
};
use crate::server::model::{
    BotStatus, BotStatusUpdate, Channel, CommandLog, CreateCommandLogParam, CreateMessageParam,
    Message, MessagePage, MessageQuery, Server, UpsertChannelParam, UpsertServerParam,
};

#[derive(Default)]
struct MemoryInner {
    servers: HashMap<String, Server>,
    channels: HashMap<String, Channel>,
    messages: HashMap<String, Message>,
    status: Option<BotStatus>,
    logs: Vec<CommandLog>,
    next_log_id: i32,
}

impl MemoryInner {
    fn status_mut(&mut self) -> &mut BotStatus {
        self.status.get_or_insert_with(BotStatus::initial)
    }

    fn refresh_message_counters(&mut self) {
        let count = self.messages.len() as i64;
        let status = self.status_mut();
        status.messages_count = count;
        status.storage_usage = count * BYTES_PER_MESSAGE;
    }
}

pub struct MemoryStorage {
    inner: RwLock<MemoryInner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryInner {
                next_log_id: 1,
                ..Default::default()
            }),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn upsert_server(&self, param: UpsertServerParam) -> Result<Server, StorageError> {
        let mut inner = self.inner.write().await;

        let server = match inner.servers.get_mut(&param.id) {
            Some(existing) => {
                // Only the mutable fields change; joined_at is kept
                existing.name = param.name;
                existing.icon = param.icon;
                existing.clone()
            }
            None => {
                let server = Server {
                    id: param.id.clone(),
                    name: param.name,
                    icon: param.icon,
                    joined_at: param.joined_at,
                };
                inner.servers.insert(param.id, server.clone());
                server
            }
        };

        let count = inner.servers.len() as i64;
        inner.status_mut().servers_count = count;

        Ok(server)
    }

    async fn get_servers(&self) -> Result<Vec<Server>, StorageError> {
        let inner = self.inner.read().await;

        let mut servers: Vec<Server> = inner.servers.values().cloned().collect();
        servers.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(servers)
    }

    async fn get_server(&self, id: &str) -> Result<Option<Server>, StorageError> {
        let inner = self.inner.read().await;

        Ok(inner.servers.get(id).cloned())
    }

    async fn upsert_channel(&self, param: UpsertChannelParam) -> Result<Channel, StorageError> {
        let mut inner = self.inner.write().await;

        let channel = match inner.channels.get_mut(&param.id) {
            Some(existing) => {
                existing.name = param.name;
                existing.kind = param.kind;
                existing.clone()
            }
            None => {
                let channel = Channel {
                    id: param.id.clone(),
                    server_id: param.server_id,
                    name: param.name,
                    kind: param.kind,
                };
                inner.channels.insert(param.id, channel.clone());
                channel
            }
        };

        let count = inner.channels.len() as i64;
        inner.status_mut().channels_count = count;

        Ok(channel)
    }

    async fn get_channels(&self, server_id: Option<&str>) -> Result<Vec<Channel>, StorageError> {
        let inner = self.inner.read().await;

        let mut channels: Vec<Channel> = inner
            .channels
            .values()
            .filter(|channel| server_id.is_none_or(|id| channel.server_id == id))
            .cloned()
            .collect();
        channels.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(channels)
    }

    async fn create_message(&self, param: CreateMessageParam) -> Result<Message, StorageError> {
        let mut inner = self.inner.write().await;

        // First stored version wins; redelivery never mutates history
        if let Some(existing) = inner.messages.get(&param.id) {
            return Ok(existing.clone());
        }

        let message = Message {
            id: param.id.clone(),
            server_id: param.server_id,
            channel_id: param.channel_id,
            author_id: param.author_id,
            author_username: param.author_username,
            author_discriminator: param.author_discriminator,
            content: param.content,
            created_at: param.created_at,
        };
        inner.messages.insert(param.id, message.clone());
        inner.refresh_message_counters();

        Ok(message)
    }

    async fn get_messages(&self, query: MessageQuery) -> Result<MessagePage, StorageError> {
        let inner = self.inner.read().await;

        let search = query.search.as_deref().map(str::to_lowercase);

        let mut matching: Vec<Message> = inner
            .messages
            .values()
            .filter(|message| {
                query
                    .server_id
                    .as_deref()
                    .is_none_or(|id| message.server_id == id)
            })
            .filter(|message| {
                query
                    .channel_id
                    .as_deref()
                    .is_none_or(|id| message.channel_id == id)
            })
            .filter(|message| {
                search.as_deref().is_none_or(|needle| {
                    message.content.to_lowercase().contains(needle)
                        || message.author_username.to_lowercase().contains(needle)
                })
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = matching.len() as u64;
        let messages = matching
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect();

        Ok(MessagePage { messages, total })
    }

    async fn oldest_message_at(&self) -> Result<Option<DateTime<Utc>>, StorageError> {
        let inner = self.inner.read().await;

        Ok(inner.messages.values().map(|m| m.created_at).min())
    }

    async fn delete_old_messages(&self) -> Result<u64, StorageError> {
        let mut inner = self.inner.write().await;

        let cutoff = Utc::now() - Duration::days(RETENTION_DAYS);
        let before = inner.messages.len();
        inner.messages.retain(|_, message| message.created_at >= cutoff);
        let deleted = (before - inner.messages.len()) as u64;

        inner.refresh_message_counters();

        Ok(deleted)
    }

    async fn get_bot_status(&self) -> Result<BotStatus, StorageError> {
        let mut inner = self.inner.write().await;

        Ok(inner.status_mut().clone())
    }

    async fn update_bot_status(&self, update: BotStatusUpdate) -> Result<BotStatus, StorageError> {
        let mut inner = self.inner.write().await;

        let status = inner.status_mut();
        if let Some(is_online) = update.is_online {
            status.is_online = is_online;
        }
        if let Some(uptime_started) = update.uptime_started {
            status.uptime_started = uptime_started;
        }
        if let Some(servers_count) = update.servers_count {
            status.servers_count = servers_count;
        }
        if let Some(channels_count) = update.channels_count {
            status.channels_count = channels_count;
        }
        if let Some(messages_count) = update.messages_count {
            status.messages_count = messages_count;
        }
        if let Some(storage_usage) = update.storage_usage {
            status.storage_usage = storage_usage;
        }

        Ok(status.clone())
    }

    async fn create_command_log(
        &self,
        param: CreateCommandLogParam,
    ) -> Result<CommandLog, StorageError> {
        let mut inner = self.inner.write().await;

        let log = CommandLog {
            id: inner.next_log_id,
            command: param.command,
            response: param.response,
            executed_at: param.executed_at,
        };
        inner.next_log_id += 1;
        inner.logs.push(log.clone());

        // Trim to the newest entries by executed_at, insertion order on ties
        if inner.logs.len() as u64 > COMMAND_LOG_CAP {
            inner
                .logs
                .sort_by(|a, b| a.executed_at.cmp(&b.executed_at).then_with(|| a.id.cmp(&b.id)));
            let excess = inner.logs.len() - COMMAND_LOG_CAP as usize;
            inner.logs.drain(..excess);
        }

        Ok(log)
    }

    async fn get_command_logs(&self, limit: u64) -> Result<Vec<CommandLog>, StorageError> {
        let inner = self.inner.read().await;

        let mut logs = inner.logs.clone();
        logs.sort_by(|a, b| {
            b.executed_at
                .cmp(&a.executed_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        logs.truncate(limit as usize);

        Ok(logs)
    }
}
