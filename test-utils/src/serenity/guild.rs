//! Test factory for creating Serenity Guild objects.

use serenity::all::Guild;

/// Creates a test Serenity Guild with customizable fields.
///
/// The icon hash is automatically padded to 32 characters (Discord's icon
/// hash format) if it's shorter. All other fields are set to reasonable
/// defaults.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `icon_hash` - Optional icon hash (padded to 32 characters if shorter)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str, icon_hash: Option<&str>) -> Guild {
    create_test_guild_with_channels(guild_id, name, icon_hash, &[])
}

/// Creates a test guild carrying text channels, as the gateway delivers them
/// in the guild-create payload.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `icon_hash` - Optional icon hash
/// - `channels` - (channel_id, channel_name) pairs; all created as text channels
pub fn create_test_guild_with_channels(
    guild_id: u64,
    name: &str,
    icon_hash: Option<&str>,
    channels: &[(u64, &str)],
) -> Guild {
    // Pad icon hash to 32 characters if provided (Discord icon hash format)
    let formatted_icon = icon_hash.map(|hash| {
        if hash.len() < 32 {
            format!("{:0<32}", hash)
        } else {
            hash.to_string()
        }
    });

    let channel_values: Vec<serde_json::Value> = channels
        .iter()
        .map(|(channel_id, channel_name)| {
            serde_json::json!({
                "id": channel_id.to_string(),
                "type": 0,
                "guild_id": guild_id.to_string(),
                "name": channel_name,
                "position": 0,
                "permission_overwrites": [],
                "nsfw": false,
                "rate_limit_per_user": 0,
                "topic": null,
                "last_message_id": null,
                "parent_id": null,
                "flags": 0,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": formatted_icon,
        "icon_hash": formatted_icon,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": channel_values,
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
