//! Channel event handlers.
//!
//! Only text channels are tracked: they are the only channel type whose
//! messages the archive stores. The upsert absorbs both create and update,
//! and channels are never deleted from storage.

use serenity::all::{ChannelType, Context, GuildChannel};

use crate::server::{data::Storage, model::UpsertChannelParam};

pub async fn handle_channel_create(storage: &dyn Storage, _ctx: Context, channel: GuildChannel) {
    upsert_text_channel(storage, &channel).await;
}

pub async fn handle_channel_update(
    storage: &dyn Storage,
    _ctx: Context,
    _old: Option<GuildChannel>,
    new: GuildChannel,
) {
    upsert_text_channel(storage, &new).await;
}

async fn upsert_text_channel(storage: &dyn Storage, channel: &GuildChannel) {
    if channel.kind != ChannelType::Text {
        tracing::debug!(
            "Ignoring non-text channel {} (type: {:?}) in server {}",
            channel.name,
            channel.kind,
            channel.guild_id
        );
        return;
    }

    let param = UpsertChannelParam {
        id: channel.id.to_string(),
        server_id: channel.guild_id.to_string(),
        name: channel.name.clone(),
        kind: channel.kind.name().to_string(),
    };

    if let Err(e) = storage.upsert_channel(param).await {
        tracing::error!(
            "Failed to upsert channel {} in server {}: {e}",
            channel.name,
            channel.guild_id
        );
    }
}
