//! Guild event handlers: topology sync for servers and their channels.
//!
//! `guild_create` fires once per guild after ready and again whenever the bot
//! joins a new guild, each time carrying the guild's full channel list. The
//! upserts are idempotent, so re-running a sync absorbs topology changes
//! without special cases. Servers are never deleted: stale entries are
//! harmless metadata.

use chrono::Utc;
use serenity::all::{ChannelType, Context, Guild, PartialGuild};

use crate::server::{
    data::{Storage, StorageError},
    model::{UpsertChannelParam, UpsertServerParam},
};

pub async fn handle_guild_create(
    storage: &dyn Storage,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    if is_new.unwrap_or(false) {
        tracing::info!("Joined new server {} ({})", guild.name, guild.id);
    }

    if let Err(e) = sync_guild(storage, &guild).await {
        tracing::error!("Failed to sync server {} ({}): {e}", guild.name, guild.id);
    }
}

pub async fn handle_guild_update(
    storage: &dyn Storage,
    _ctx: Context,
    _old: Option<Guild>,
    new: PartialGuild,
) {
    let param = UpsertServerParam {
        id: new.id.to_string(),
        name: new.name.clone(),
        icon: new.icon.map(|hash| hash.to_string()),
        joined_at: Utc::now(),
    };

    if let Err(e) = storage.upsert_server(param).await {
        tracing::error!("Failed to upsert updated server {} ({}): {e}", new.name, new.id);
    }
}

/// Upserts a guild and then each of its text channels.
///
/// The server row is written before any of its channels so the channel
/// foreign key always resolves.
pub async fn sync_guild(storage: &dyn Storage, guild: &Guild) -> Result<(), StorageError> {
    storage
        .upsert_server(UpsertServerParam {
            id: guild.id.to_string(),
            name: guild.name.clone(),
            icon: guild.icon.map(|hash| hash.to_string()),
            joined_at: guild.joined_at.to_utc(),
        })
        .await?;

    let mut channels: Vec<_> = guild
        .channels
        .values()
        .filter(|channel| channel.kind == ChannelType::Text)
        .collect();
    channels.sort_by_key(|channel| channel.id);

    for channel in channels {
        storage
            .upsert_channel(UpsertChannelParam {
                id: channel.id.to_string(),
                server_id: guild.id.to_string(),
                name: channel.name.clone(),
                kind: channel.kind.name().to_string(),
            })
            .await?;
    }

    tracing::debug!("Synced server {} ({})", guild.name, guild.id);

    Ok(())
}
