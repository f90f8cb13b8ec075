use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Bot status report returned by `GET /api/status`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDto {
    pub is_online: bool,
    pub uptime_started: Option<DateTime<Utc>>,
    pub servers_count: i64,
    pub channels_count: i64,
    pub messages_count: i64,
    pub storage_usage: i64,
    /// Human-readable uptime, e.g. "2d 3h".
    pub uptime: String,
    pub is_connected: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerDto {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub joined_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDto {
    pub id: String,
    pub server_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Archived message enriched with the resolved channel name.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub server_id: String,
    pub channel_id: String,
    pub channel_name: Option<String>,
    pub author_id: String,
    pub author_username: String,
    pub author_discriminator: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesResponseDto {
    pub messages: Vec<MessageDto>,
    pub total: u64,
}

/// Aggregate report returned by `GET /api/stats`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_messages: i64,
    pub active_channels: usize,
    /// How long the archive has been accumulating, e.g. "12d 4h".
    pub monitoring_duration: String,
    /// Formatted storage estimate, e.g. "3.5 MB".
    pub storage_used: String,
    /// Share of the fixed capacity ceiling, in percent.
    pub storage_percent: f64,
    pub oldest_message_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandLogDto {
    pub id: i32,
    pub command: String,
    pub response: String,
    pub executed_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCommandDto {
    pub command: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCommandResponseDto {
    pub response: String,
}

/// Query string accepted by `GET /api/messages`.
#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessageQueryDto {
    pub server_id: Option<String>,
    pub channel_id: Option<String>,
    pub search: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelQueryDto {
    pub server_id: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommandLogQueryDto {
    pub limit: Option<u64>,
}
