use std::sync::Arc;

use serenity::all::{
    Context, EventHandler, Guild, GuildChannel, Message, PartialGuild, Ready,
    ShardStageUpdateEvent,
};
use serenity::async_trait;

use crate::server::data::Storage;

pub mod channel;
pub mod guild;
pub mod message;
pub mod ready;

/// Discord gateway event handler.
///
/// Each event is dispatched to its own module; handlers run to completion
/// before the next event for the shard is processed, and every handler
/// isolates its own failures so one bad event never stops the loop.
pub struct Handler {
    pub storage: Arc<dyn Storage>,
}

impl Handler {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self.storage.as_ref(), ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(self.storage.as_ref(), ctx, guild, is_new).await;
    }

    /// Called when a guild's metadata (name, icon) changes
    async fn guild_update(&self, ctx: Context, old: Option<Guild>, new: PartialGuild) {
        guild::handle_guild_update(self.storage.as_ref(), ctx, old, new).await;
    }

    /// Called when a channel is created in a guild
    async fn channel_create(&self, ctx: Context, channel: GuildChannel) {
        channel::handle_channel_create(self.storage.as_ref(), ctx, channel).await;
    }

    /// Called when a channel is updated in a guild
    async fn channel_update(&self, ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        channel::handle_channel_update(self.storage.as_ref(), ctx, old, new).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self.storage.as_ref(), ctx, message).await;
    }

    /// Called when a shard's connection stage changes; reconnection itself is
    /// owned by the transport layer, this only records what happened
    async fn shard_stage_update(&self, _ctx: Context, event: ShardStageUpdateEvent) {
        tracing::info!(
            "Shard {} connection stage: {} -> {}",
            event.shard_id,
            event.old,
            event.new
        );
    }
}
