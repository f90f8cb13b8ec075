use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests storing a new message.
///
/// Verifies the record round-trips and that the derived counters on the
/// status row reflect the insert before the call returns.
///
/// Expected: Ok with message stored, messages_count 1
#[tokio::test]
async fn stores_new_message_and_recomputes_counters() -> Result<(), StorageError> {
    let (storage, _db) = database_storage().await;

    let stored = storage
        .create_message(message_param("m1", "s1", "c1", "hello"))
        .await?;

    assert_eq!(stored.id, "m1");
    assert_eq!(stored.content, "hello");

    let status = storage.get_bot_status().await?;
    assert_eq!(status.messages_count, 1);
    assert_eq!(status.storage_usage, BYTES_PER_MESSAGE);

    Ok(())
}

/// Tests the idempotent insert contract.
///
/// Storing a second message with the same id but different content must be a
/// no-op: the original record is returned unchanged, no duplicate row exists,
/// and the counters are untouched.
///
/// Expected: Ok with one row carrying the original content
#[tokio::test]
async fn duplicate_id_returns_original_unchanged() -> Result<(), StorageError> {
    let (storage, db) = database_storage().await;

    storage
        .create_message(message_param("m1", "s1", "c1", "original"))
        .await?;

    let replayed = storage
        .create_message(message_param("m1", "s1", "c1", "tampered"))
        .await?;

    assert_eq!(replayed.content, "original");

    let rows = entity::prelude::Message::find().count(&db).await.unwrap();
    assert_eq!(rows, 1);

    let status = storage.get_bot_status().await?;
    assert_eq!(status.messages_count, 1);

    Ok(())
}

/// Tests count consistency across a mixed sequence of operations.
///
/// After every create (including a duplicate no-op) and a retention sweep,
/// messages_count equals the live number of stored rows.
///
/// Expected: counters track live cardinality at each step
#[tokio::test]
async fn count_matches_live_cardinality_after_each_operation() -> Result<(), StorageError> {
    let (storage, _db) = database_storage().await;

    for i in 0..3 {
        storage
            .create_message(message_param(&format!("m{i}"), "s1", "c1", "content"))
            .await?;
        let status = storage.get_bot_status().await?;
        assert_eq!(status.messages_count, i + 1);
    }

    // Duplicate does not bump the count
    storage
        .create_message(message_param("m0", "s1", "c1", "content"))
        .await?;
    let status = storage.get_bot_status().await?;
    assert_eq!(status.messages_count, 3);
    assert_eq!(status.storage_usage, 3 * BYTES_PER_MESSAGE);

    // Nothing is past the window, so the sweep changes nothing
    let deleted = storage.delete_old_messages().await?;
    assert_eq!(deleted, 0);
    let status = storage.get_bot_status().await?;
    assert_eq!(status.messages_count, 3);

    Ok(())
}
