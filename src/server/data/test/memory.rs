//! The in-memory backend must satisfy the same contract as the database
//! backend; these tests mirror the key properties against `MemoryStorage`.

use super::*;

fn aged_message_param(id: &str, age: Duration) -> CreateMessageParam {
    let mut param = message_param(id, "s1", "c1", "content");
    param.created_at = Utc::now() - age;
    param
}

/// Tests the idempotent insert contract on the memory backend.
///
/// Expected: original content wins, count stays 1
#[tokio::test]
async fn create_message_is_idempotent() -> Result<(), StorageError> {
    let storage = MemoryStorage::new();

    storage
        .create_message(message_param("m1", "s1", "c1", "original"))
        .await?;
    let replayed = storage
        .create_message(message_param("m1", "s1", "c1", "tampered"))
        .await?;

    assert_eq!(replayed.content, "original");

    let status = storage.get_bot_status().await?;
    assert_eq!(status.messages_count, 1);
    assert_eq!(status.storage_usage, BYTES_PER_MESSAGE);

    Ok(())
}

/// Tests the retention boundary on the memory backend.
///
/// Expected: 15d and 14d+1s messages deleted, 13d message kept
#[tokio::test]
async fn delete_old_messages_uses_strict_cutoff() -> Result<(), StorageError> {
    let storage = MemoryStorage::new();

    storage
        .create_message(aged_message_param("ancient", Duration::days(15)))
        .await?;
    storage
        .create_message(aged_message_param(
            "expired",
            Duration::days(RETENTION_DAYS) + Duration::seconds(1),
        ))
        .await?;
    storage
        .create_message(aged_message_param("fresh", Duration::days(13)))
        .await?;

    let deleted = storage.delete_old_messages().await?;
    assert_eq!(deleted, 2);

    let remaining = storage.get_messages(MessageQuery::default()).await?;
    assert_eq!(remaining.total, 1);
    assert_eq!(remaining.messages[0].id, "fresh");

    let status = storage.get_bot_status().await?;
    assert_eq!(status.messages_count, 1);

    Ok(())
}

/// Tests pagination totals and ordering on the memory backend.
///
/// Expected: 5 then 3 disjoint results of 8, both reporting total 8,
/// newest first
#[tokio::test]
async fn paginates_newest_first_with_totals() -> Result<(), StorageError> {
    let storage = MemoryStorage::new();

    for i in 0..8 {
        storage
            .create_message(aged_message_param(&format!("m{i}"), Duration::minutes(i)))
            .await?;
    }

    let first = storage
        .get_messages(MessageQuery {
            limit: 5,
            offset: 0,
            ..Default::default()
        })
        .await?;
    let second = storage
        .get_messages(MessageQuery {
            limit: 5,
            offset: 5,
            ..Default::default()
        })
        .await?;

    assert_eq!(first.messages.len(), 5);
    assert_eq!(second.messages.len(), 3);
    assert_eq!(first.total, 8);
    assert_eq!(second.total, 8);

    // m0 is the newest (age zero), so pages run m0..m4 then m5..m7
    assert_eq!(first.messages[0].id, "m0");
    assert_eq!(second.messages.last().unwrap().id, "m7");

    Ok(())
}

/// Tests case-insensitive search across content and username.
///
/// Expected: hits through either field regardless of case
#[tokio::test]
async fn search_matches_username_case_insensitive() -> Result<(), StorageError> {
    let storage = MemoryStorage::new();

    let mut by_name = message_param("m1", "s1", "c1", "unrelated text");
    by_name.author_username = "Zebra-77".to_string();
    storage.create_message(by_name).await?;

    storage
        .create_message(message_param("m2", "s1", "c1", "no hits here"))
        .await?;

    let page = storage
        .get_messages(MessageQuery {
            search: Some("zebra".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.messages[0].id, "m1");

    Ok(())
}

/// Tests that upserts update in place and counters follow.
///
/// Expected: one row per id, counts matching live cardinality
#[tokio::test]
async fn upserts_update_in_place_and_counters_follow() -> Result<(), StorageError> {
    let storage = MemoryStorage::new();

    storage.upsert_server(server_param("s1", "Old")).await?;
    let renamed = storage.upsert_server(server_param("s1", "New")).await?;
    assert_eq!(renamed.name, "New");

    storage
        .upsert_channel(channel_param("c1", "s1", "general"))
        .await?;
    storage
        .upsert_channel(channel_param("c1", "s1", "renamed"))
        .await?;

    let status = storage.get_bot_status().await?;
    assert_eq!(status.servers_count, 1);
    assert_eq!(status.channels_count, 1);

    let channels = storage.get_channels(Some("s1")).await?;
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].name, "renamed");

    Ok(())
}

/// Tests partial status updates on the memory backend.
///
/// Expected: only supplied fields merged, nested option clears the timestamp
#[tokio::test]
async fn status_partial_update_merges() -> Result<(), StorageError> {
    let storage = MemoryStorage::new();

    let started = Utc::now();
    storage
        .update_bot_status(BotStatusUpdate {
            is_online: Some(true),
            uptime_started: Some(Some(started)),
            ..Default::default()
        })
        .await?;

    let status = storage
        .update_bot_status(BotStatusUpdate {
            uptime_started: Some(None),
            ..Default::default()
        })
        .await?;

    assert!(status.is_online);
    assert!(status.uptime_started.is_none());

    Ok(())
}

/// Tests command log capping and ordering on the memory backend.
///
/// Expected: newest COMMAND_LOG_CAP entries kept, newest-first retrieval
#[tokio::test]
async fn command_log_trims_and_orders() -> Result<(), StorageError> {
    let storage = MemoryStorage::new();

    let base = Utc::now();
    let total = COMMAND_LOG_CAP + 5;
    for i in 0..total {
        storage
            .create_command_log(log_param(
                &format!("!cmd-{i}"),
                base + Duration::seconds(i as i64),
            ))
            .await?;
    }

    let logs = storage.get_command_logs(total + 10).await?;

    assert_eq!(logs.len() as u64, COMMAND_LOG_CAP);
    assert_eq!(logs[0].command, format!("!cmd-{}", total - 1));
    assert_eq!(logs.last().unwrap().command, "!cmd-5");

    Ok(())
}

/// Tests the not-found contract on the memory backend.
///
/// Expected: Ok(None) for unknown ids
#[tokio::test]
async fn lookup_of_unknown_server_is_none() -> Result<(), StorageError> {
    let storage = MemoryStorage::new();

    assert!(storage.get_server("missing").await?.is_none());

    Ok(())
}
