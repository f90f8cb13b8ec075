//! Ready event handler for connection establishment.
//!
//! Fires after the gateway handshake completes, including after serenity's
//! internal reconnects, so the persisted online flag is refreshed here as
//! well as in the connection manager. The full topology resync follows via
//! the per-guild `guild_create` events the gateway delivers next: each guild
//! arrives with its complete channel list, server before channels.

use serenity::all::{ActivityData, Context, Ready};

use crate::server::{data::Storage, model::BotStatusUpdate};

pub async fn handle_ready(storage: &dyn Storage, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("the archive")));

    if let Err(e) = storage
        .update_bot_status(BotStatusUpdate {
            is_online: Some(true),
            ..Default::default()
        })
        .await
    {
        tracing::error!("Failed to persist online status: {e}");
    }
}
