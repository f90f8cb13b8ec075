use std::sync::Arc;

use chrono::{DateTime, Utc};
use serenity::all::{Client, GatewayIntents, ShardManager};
use tokio::sync::{Mutex, RwLock};
use tokio_cron_scheduler::JobScheduler;

use crate::server::{
    bot::handler::Handler,
    data::Storage,
    error::AppError,
    model::BotStatusUpdate,
    scheduler::retention,
    util::format::format_uptime,
};

/// Owns the lifecycle of the single upstream gateway connection.
///
/// Connection state transitions are persisted to the status row before
/// `start()` / `stop()` return, so a concurrent status query only ever
/// observes the prior state or the new state.
pub struct BotManager {
    storage: Arc<dyn Storage>,
    token: Option<String>,
    shard_manager: Mutex<Option<Arc<ShardManager>>>,
    scheduler: Mutex<Option<JobScheduler>>,
    started_at: RwLock<Option<DateTime<Utc>>>,
}

impl BotManager {
    pub fn new(storage: Arc<dyn Storage>, token: Option<String>) -> Self {
        Self {
            storage,
            token,
            shard_manager: Mutex::new(None),
            scheduler: Mutex::new(None),
            started_at: RwLock::new(None),
        }
    }

    /// Opens the gateway connection and arms the hourly retention sweep.
    ///
    /// On success the online status and start time are persisted before this
    /// returns, and the gateway run loop is spawned onto its own task. On
    /// failure the offline status is persisted and the error propagates; the
    /// caller may keep serving in a degraded offline mode.
    pub async fn start(&self) -> Result<(), AppError> {
        let Some(token) = self.token.as_deref() else {
            self.persist_offline().await;
            return Err(AppError::Unavailable(
                "DISCORD_BOT_TOKEN is not set".to_string(),
            ));
        };

        let intents = GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT;

        let handler = Handler::new(self.storage.clone());

        let mut client = match Client::builder(token, intents).event_handler(handler).await {
            Ok(client) => client,
            Err(e) => {
                self.persist_offline().await;
                return Err(e.into());
            }
        };

        *self.shard_manager.lock().await = Some(client.shard_manager.clone());

        let started = Utc::now();
        *self.started_at.write().await = Some(started);
        self.storage
            .update_bot_status(BotStatusUpdate {
                is_online: Some(true),
                uptime_started: Some(Some(started)),
                ..Default::default()
            })
            .await?;

        let scheduler = retention::start_scheduler(self.storage.clone()).await?;
        *self.scheduler.lock().await = Some(scheduler);

        let storage = self.storage.clone();
        tokio::spawn(async move {
            tracing::info!("Starting Discord gateway connection");

            // start() blocks until the connection is torn down; an error here
            // is terminal for the session, not for the process
            if let Err(e) = client.start().await {
                tracing::error!("Gateway connection terminated: {e}");

                if let Err(e) = storage
                    .update_bot_status(BotStatusUpdate {
                        is_online: Some(false),
                        uptime_started: Some(None),
                        ..Default::default()
                    })
                    .await
                {
                    tracing::error!("Failed to persist offline status: {e}");
                }
            }
        });

        Ok(())
    }

    /// Tears the connection down: disarms the retention scheduler so no sweep
    /// can fire after shutdown, closes all shards, clears the start time, and
    /// persists the offline status. Calling this while not connected is a
    /// no-op.
    pub async fn stop(&self) -> Result<(), AppError> {
        let scheduler = self.scheduler.lock().await.take();
        let shard_manager = self.shard_manager.lock().await.take();

        if scheduler.is_none() && shard_manager.is_none() {
            return Ok(());
        }

        if let Some(mut scheduler) = scheduler {
            scheduler.shutdown().await?;
        }

        if let Some(shard_manager) = shard_manager {
            shard_manager.shutdown_all().await;
        }

        *self.started_at.write().await = None;
        self.storage
            .update_bot_status(BotStatusUpdate {
                is_online: Some(false),
                uptime_started: Some(None),
                ..Default::default()
            })
            .await?;

        Ok(())
    }

    pub async fn is_connected(&self) -> bool {
        self.started_at.read().await.is_some()
    }

    /// Formatted connection uptime; the "0m" sentinel when not connected.
    pub async fn uptime(&self) -> String {
        match *self.started_at.read().await {
            Some(started) => format_uptime(Utc::now() - started),
            None => "0m".to_string(),
        }
    }

    /// Best-effort offline persistence on a failed start; the startup error
    /// itself is the one worth surfacing.
    async fn persist_offline(&self) {
        if let Err(e) = self
            .storage
            .update_bot_status(BotStatusUpdate {
                is_online: Some(false),
                uptime_started: Some(None),
                ..Default::default()
            })
            .await
        {
            tracing::error!("Failed to persist offline status: {e}");
        }
    }
}
