use chrono::{DateTime, Utc};

/// The singleton status aggregate.
///
/// Counters are derived caches: the storage layer recomputes them after every
/// mutating call that affects a count, so they always match the live
/// cardinality of the underlying collections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotStatus {
    pub is_online: bool,
    pub uptime_started: Option<DateTime<Utc>>,
    pub servers_count: i64,
    pub channels_count: i64,
    pub messages_count: i64,
    pub storage_usage: i64,
}

impl BotStatus {
    pub fn from_entity(entity: entity::bot_status::Model) -> Self {
        Self {
            is_online: entity.is_online,
            uptime_started: entity.uptime_started,
            servers_count: entity.servers_count,
            channels_count: entity.channels_count,
            messages_count: entity.messages_count,
            storage_usage: entity.storage_usage,
        }
    }

    /// State of the row at first boot, before any connection or sync.
    pub fn initial() -> Self {
        Self {
            is_online: false,
            uptime_started: None,
            servers_count: 0,
            channels_count: 0,
            messages_count: 0,
            storage_usage: 0,
        }
    }
}

/// Partial update for the status row; only supplied fields are merged.
///
/// The double `Option` on `uptime_started` distinguishes "leave unchanged"
/// (`None`) from "clear the timestamp" (`Some(None)`).
#[derive(Clone, Debug, Default)]
pub struct BotStatusUpdate {
    pub is_online: Option<bool>,
    pub uptime_started: Option<Option<DateTime<Utc>>>,
    pub servers_count: Option<i64>,
    pub channels_count: Option<i64>,
    pub messages_count: Option<i64>,
    pub storage_usage: Option<i64>,
}
