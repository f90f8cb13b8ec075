//! Message ingestion and command auto-reply.
//!
//! Every stored message goes through the idempotent repository insert, so
//! gateway redelivery cannot duplicate history. Messages that carry the
//! command prefix additionally run through the command executor, and the
//! response is sent back on the originating channel.

use chrono::Utc;
use serenity::all::{Context, Message, UserId};

use crate::server::{
    data::Storage,
    model::{CreateCommandLogParam, CreateMessageParam},
    service::command::{CommandService, COMMAND_PREFIX},
};

pub async fn handle_message(storage: &dyn Storage, ctx: Context, message: Message) {
    let own_id = ctx.cache.current_user().id;

    let Some(param) = archive_param(&message, own_id) else {
        return;
    };

    if let Err(e) = storage.create_message(param).await {
        tracing::error!("Failed to store message {}: {e}", message.id);
        return;
    }

    if !message.content.starts_with(COMMAND_PREFIX) {
        return;
    }

    let response = match CommandService::new(storage).execute(&message.content).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Command '{}' failed: {e}", message.content);
            format!("Command failed: {e}")
        }
    };

    let log = CreateCommandLogParam {
        command: message.content.clone(),
        response: response.clone(),
        executed_at: Utc::now(),
    };
    if let Err(e) = storage.create_command_log(log).await {
        tracing::error!("Failed to record command log: {e}");
    }

    if let Err(e) = message.channel_id.say(&ctx.http, &response).await {
        tracing::error!(
            "Failed to send command response in channel {}: {e}",
            message.channel_id
        );
    }
}

/// Converts a gateway message into storage parameters.
///
/// Returns `None` for messages that must not be archived: the bot's own
/// messages (feedback-loop guard) and direct messages (no server context).
pub fn archive_param(message: &Message, own_id: UserId) -> Option<CreateMessageParam> {
    if message.author.id == own_id {
        return None;
    }

    let server_id = message.guild_id?;

    Some(CreateMessageParam {
        id: message.id.to_string(),
        server_id: server_id.to_string(),
        channel_id: message.channel_id.to_string(),
        author_id: message.author.id.to_string(),
        author_username: message.author.name.clone(),
        author_discriminator: message.author.discriminator.map(|d| format!("{d:04}")),
        content: message.content.clone(),
        created_at: message.timestamp.to_utc(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use test_utils::serenity::create_test_message;

    /// A guild message from another user converts into storage parameters
    /// with every field mapped.
    #[test]
    fn archives_guild_messages_from_others() {
        let message = create_test_message(10, 20, Some(30), 40, "alice", "hello there");

        let param = archive_param(&message, UserId::new(99)).expect("message should be archived");

        assert_eq!(param.id, "10");
        assert_eq!(param.channel_id, "20");
        assert_eq!(param.server_id, "30");
        assert_eq!(param.author_id, "40");
        assert_eq!(param.author_username, "alice");
        assert_eq!(param.author_discriminator, Some("0001".to_string()));
        assert_eq!(param.content, "hello there");
    }

    /// The bot's own messages are dropped to prevent feedback loops.
    #[test]
    fn skips_own_messages() {
        let message = create_test_message(10, 20, Some(30), 99, "chatvault", "!stats");

        assert!(archive_param(&message, UserId::new(99)).is_none());
    }

    /// Direct messages carry no server context and are never stored.
    #[test]
    fn skips_direct_messages() {
        let message = create_test_message(10, 20, None, 40, "alice", "psst");

        assert!(archive_param(&message, UserId::new(99)).is_none());
    }
}
