use chrono::{DateTime, Utc};

/// An archived chat message. Immutable once stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub server_id: String,
    pub channel_id: String,
    pub author_id: String,
    pub author_username: String,
    pub author_discriminator: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            channel_id: entity.channel_id,
            author_id: entity.author_id,
            author_username: entity.author_username,
            author_discriminator: entity.author_discriminator,
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for the ingestion-path insert.
///
/// `id` is the upstream-assigned snowflake; a second store attempt with the
/// same id is a no-op returning the original record.
#[derive(Clone, Debug)]
pub struct CreateMessageParam {
    pub id: String,
    pub server_id: String,
    pub channel_id: String,
    pub author_id: String,
    pub author_username: String,
    pub author_discriminator: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Filtered, paginated message lookup. Filters are conjunctive.
#[derive(Clone, Debug)]
pub struct MessageQuery {
    pub server_id: Option<String>,
    pub channel_id: Option<String>,
    /// Case-insensitive substring match against content or author username.
    pub search: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

impl Default for MessageQuery {
    fn default() -> Self {
        Self {
            server_id: None,
            channel_id: None,
            search: None,
            limit: 10,
            offset: 0,
        }
    }
}

/// One page of results plus the pre-pagination total, so callers can compute
/// page counts.
#[derive(Clone, Debug)]
pub struct MessagePage {
    pub messages: Vec<Message>,
    pub total: u64,
}
