use chrono::Utc;

use crate::{
    model::api::StatsDto,
    server::{data::Storage, error::AppError, util::format::{format_bytes, format_uptime}},
};

/// Fixed capacity ceiling the storage-usage percentage is reported against.
const STORAGE_CAPACITY_BYTES: i64 = 1024 * 1024 * 1024;

pub struct StatsService<'a> {
    storage: &'a dyn Storage,
}

impl<'a> StatsService<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Builds the aggregate report for `GET /api/stats` from repository
    /// primitives; nothing is cached, so the report reflects the latest
    /// committed writes.
    pub async fn report(&self) -> Result<StatsDto, AppError> {
        let status = self.storage.get_bot_status().await?;
        let channels = self.storage.get_channels(None).await?;
        let oldest = self.storage.oldest_message_at().await?;

        let monitoring_duration = match oldest {
            Some(oldest) => format_uptime(Utc::now() - oldest),
            None => "0m".to_string(),
        };

        let storage_percent =
            (status.storage_usage as f64 / STORAGE_CAPACITY_BYTES as f64) * 100.0;

        Ok(StatsDto {
            total_messages: status.messages_count,
            active_channels: channels.len(),
            monitoring_duration,
            storage_used: format_bytes(status.storage_usage),
            storage_percent: (storage_percent * 100.0).round() / 100.0,
            oldest_message_at: oldest,
        })
    }
}
