//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Creates a test Serenity Message with customizable fields.
///
/// The payload mirrors what Discord's gateway delivers for a message-create
/// event. Pass `guild_id: None` to simulate a direct message.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was sent in
/// - `guild_id` - Owning guild, or `None` for a direct message
/// - `author_id` - Message author's user ID
/// - `author_name` - Message author's username
/// - `content` - Message text
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author_id: u64,
    author_name: &str,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": {
            "id": author_id.to_string(),
            "username": author_name,
            "discriminator": "0001",
            "global_name": null,
            "avatar": null,
            "bot": false,
            "public_flags": 0,
        },
        "content": content,
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "activity": null,
        "application": null,
        "message_reference": null,
        "flags": 0,
        "referenced_message": null,
        "thread": null,
        "components": [],
        "sticker_items": [],
        "position": null,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
