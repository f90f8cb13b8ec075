//! Message factory for creating test message entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages with customizable fields.
///
/// Defaults:
/// - id: auto-incremented counter value as a string
/// - author_id: `"9{id}"`
/// - author_username: `"user-{id}"`
/// - author_discriminator: `None`
/// - content: `"Message {id}"`
/// - created_at: now
///
/// The server and channel ids are required up front; tests control timestamps
/// through `created_at()` to exercise retention and ordering.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    server_id: String,
    channel_id: String,
    author_id: String,
    author_username: String,
    author_discriminator: Option<String>,
    content: String,
    created_at: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, server_id: &str, channel_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            server_id: server_id.to_string(),
            channel_id: channel_id.to_string(),
            author_id: format!("9{id}"),
            author_username: format!("user-{id}"),
            author_discriminator: None,
            content: format!("Message {id}"),
            created_at: Utc::now(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn author_username(mut self, author_username: impl Into<String>) -> Self {
        self.author_username = author_username.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            id: ActiveValue::Set(self.id),
            server_id: ActiveValue::Set(self.server_id),
            channel_id: ActiveValue::Set(self.channel_id),
            author_id: ActiveValue::Set(self.author_id),
            author_username: ActiveValue::Set(self.author_username),
            author_discriminator: ActiveValue::Set(self.author_discriminator),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}
