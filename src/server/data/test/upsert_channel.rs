use super::*;

/// Tests inserting a new channel under an existing server.
///
/// Expected: Ok with channel created and channels_count 1
#[tokio::test]
async fn inserts_new_channel() -> Result<(), StorageError> {
    let (storage, _db) = database_storage().await;

    storage.upsert_server(server_param("s1", "Guild")).await?;
    let channel = storage
        .upsert_channel(channel_param("c1", "s1", "general"))
        .await?;

    assert_eq!(channel.id, "c1");
    assert_eq!(channel.server_id, "s1");
    assert_eq!(channel.kind, "text");

    let status = storage.get_bot_status().await?;
    assert_eq!(status.channels_count, 1);

    Ok(())
}

/// Tests that a repeated upsert renames the channel in place.
///
/// Expected: Ok with one row carrying the new name
#[tokio::test]
async fn updates_name_in_place() -> Result<(), StorageError> {
    let (storage, _db) = database_storage().await;

    storage.upsert_server(server_param("s1", "Guild")).await?;
    storage
        .upsert_channel(channel_param("c1", "s1", "general"))
        .await?;
    let renamed = storage
        .upsert_channel(channel_param("c1", "s1", "announcements"))
        .await?;

    assert_eq!(renamed.name, "announcements");

    let channels = storage.get_channels(None).await?;
    assert_eq!(channels.len(), 1);

    let status = storage.get_bot_status().await?;
    assert_eq!(status.channels_count, 1);

    Ok(())
}

/// Tests the optional per-server filter on channel listing.
///
/// Expected: only the requested server's channels with the filter, all
/// channels without it
#[tokio::test]
async fn filters_by_server() -> Result<(), StorageError> {
    let (storage, _db) = database_storage().await;

    storage.upsert_server(server_param("s1", "One")).await?;
    storage.upsert_server(server_param("s2", "Two")).await?;
    storage
        .upsert_channel(channel_param("c1", "s1", "general"))
        .await?;
    storage
        .upsert_channel(channel_param("c2", "s2", "general"))
        .await?;

    let filtered = storage.get_channels(Some("s1")).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "c1");

    let all = storage.get_channels(None).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
