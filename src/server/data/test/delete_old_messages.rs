use super::*;
use test_utils::factory::message::MessageFactory;

/// Tests the retention boundary convention.
///
/// Messages aged 15 days and 14 days + 1 second fall past the cutoff and are
/// deleted; a 13-day-old message survives. The boundary is strict: only rows
/// strictly older than now - 14d go.
///
/// Expected: exactly 2 deleted, the 13-day message remains
#[tokio::test]
async fn deletes_strictly_older_than_cutoff() -> Result<(), StorageError> {
    let (storage, db) = database_storage().await;

    let now = Utc::now();
    MessageFactory::new(&db, "s1", "c1")
        .id("ancient")
        .created_at(now - Duration::days(15))
        .build()
        .await
        .unwrap();
    MessageFactory::new(&db, "s1", "c1")
        .id("expired")
        .created_at(now - Duration::days(RETENTION_DAYS) - Duration::seconds(1))
        .build()
        .await
        .unwrap();
    MessageFactory::new(&db, "s1", "c1")
        .id("fresh")
        .created_at(now - Duration::days(13))
        .build()
        .await
        .unwrap();

    let deleted = storage.delete_old_messages().await?;
    assert_eq!(deleted, 2);

    let remaining = storage.get_messages(MessageQuery::default()).await?;
    assert_eq!(remaining.total, 1);
    assert_eq!(remaining.messages[0].id, "fresh");

    Ok(())
}

/// Tests a sweep over an archive with nothing expired.
///
/// Expected: Ok(0) and no rows removed
#[tokio::test]
async fn returns_zero_when_nothing_expired() -> Result<(), StorageError> {
    let (storage, db) = database_storage().await;

    MessageFactory::new(&db, "s1", "c1").build().await.unwrap();

    let deleted = storage.delete_old_messages().await?;
    assert_eq!(deleted, 0);

    let remaining = storage.get_messages(MessageQuery::default()).await?;
    assert_eq!(remaining.total, 1);

    Ok(())
}

/// Tests counter recomputation after a sweep.
///
/// Rows are seeded directly (leaving the cached counters stale at zero); the
/// sweep must rebuild messages_count and storage_usage from what actually
/// survived.
///
/// Expected: counters match the one surviving row
#[tokio::test]
async fn recomputes_counters_after_sweep() -> Result<(), StorageError> {
    let (storage, db) = database_storage().await;

    let now = Utc::now();
    for i in 0..3 {
        MessageFactory::new(&db, "s1", "c1")
            .id(format!("old-{i}"))
            .created_at(now - Duration::days(20))
            .build()
            .await
            .unwrap();
    }
    MessageFactory::new(&db, "s1", "c1")
        .id("kept")
        .created_at(now)
        .build()
        .await
        .unwrap();

    let deleted = storage.delete_old_messages().await?;
    assert_eq!(deleted, 3);

    let status = storage.get_bot_status().await?;
    assert_eq!(status.messages_count, 1);
    assert_eq!(status.storage_usage, BYTES_PER_MESSAGE);

    Ok(())
}
