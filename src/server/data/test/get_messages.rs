use super::*;
use std::collections::HashSet;
use test_utils::factory::message::MessageFactory;

/// Tests two-page retrieval over eight matching messages.
///
/// Requesting limit=5/offset=0 then limit=5/offset=5 returns 5 then 3
/// results with no overlap and no gap, and both responses report total=8.
///
/// Expected: disjoint pages covering all rows, total 8 on both
#[tokio::test]
async fn paginates_without_overlap_or_gap() -> Result<(), StorageError> {
    let (storage, db) = database_storage().await;

    let base = Utc::now();
    for i in 0..8 {
        MessageFactory::new(&db, "s1", "c1")
            .id(format!("m{i}"))
            .created_at(base - Duration::minutes(i))
            .build()
            .await
            .unwrap();
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
    assert_eq!(first.total, 8);
    assert_eq!(second.messages.len(), 3);
    assert_eq!(second.total, 8);

    let ids: HashSet<String> = first
        .messages
        .iter()
        .chain(second.messages.iter())
        .map(|m| m.id.clone())
        .collect();
    assert_eq!(ids.len(), 8);

    Ok(())
}

/// Tests that search matches the author username.
///
/// A term present only in the username (not the content) still returns the
/// message.
///
/// Expected: one hit via the username
#[tokio::test]
async fn search_matches_author_username_only() -> Result<(), StorageError> {
    let (storage, db) = database_storage().await;

    MessageFactory::new(&db, "s1", "c1")
        .author_username("zebra-77")
        .content("no match in here")
        .build()
        .await
        .unwrap();
    MessageFactory::new(&db, "s1", "c1")
        .author_username("plain")
        .content("also unrelated")
        .build()
        .await
        .unwrap();

    let page = storage
        .get_messages(MessageQuery {
            search: Some("zebra".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.messages[0].author_username, "zebra-77");

    Ok(())
}

/// Tests case-insensitive substring search over content.
///
/// Expected: uppercase term matches lowercase content
#[tokio::test]
async fn search_is_case_insensitive() -> Result<(), StorageError> {
    let (storage, db) = database_storage().await;

    MessageFactory::new(&db, "s1", "c1")
        .content("deployment finished")
        .build()
        .await
        .unwrap();

    let page = storage
        .get_messages(MessageQuery {
            search: Some("DEPLOY".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 1);

    Ok(())
}

/// Tests conjunctive filtering across server and channel.
///
/// Server S1 has channels C1 (3 messages) and C2 (2 messages). Filtering by
/// server+channel returns exactly the channel's messages; filtering by server
/// alone returns all five.
///
/// Expected: 3/total=3 with both filters, 5/total=5 with the server filter
#[tokio::test]
async fn filters_are_conjunctive() -> Result<(), StorageError> {
    let (storage, db) = database_storage().await;

    for i in 0..3 {
        MessageFactory::new(&db, "s1", "c1")
            .id(format!("c1-{i}"))
            .build()
            .await
            .unwrap();
    }
    for i in 0..2 {
        MessageFactory::new(&db, "s1", "c2")
            .id(format!("c2-{i}"))
            .build()
            .await
            .unwrap();
    }

    let channel_page = storage
        .get_messages(MessageQuery {
            server_id: Some("s1".to_string()),
            channel_id: Some("c1".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(channel_page.messages.len(), 3);
    assert_eq!(channel_page.total, 3);

    let server_page = storage
        .get_messages(MessageQuery {
            server_id: Some("s1".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(server_page.messages.len(), 5);
    assert_eq!(server_page.total, 5);

    Ok(())
}

/// Tests newest-first ordering.
///
/// Expected: results sorted by created_at descending
#[tokio::test]
async fn orders_newest_first() -> Result<(), StorageError> {
    let (storage, db) = database_storage().await;

    let base = Utc::now();
    for (id, age_minutes) in [("old", 30), ("newest", 0), ("middle", 10)] {
        MessageFactory::new(&db, "s1", "c1")
            .id(id)
            .created_at(base - Duration::minutes(age_minutes))
            .build()
            .await
            .unwrap();
    }

    let page = storage.get_messages(MessageQuery::default()).await?;

    let ids: Vec<&str> = page.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["newest", "middle", "old"]);

    Ok(())
}

/// Tests the default page size.
///
/// Expected: an unconfigured query returns at most 10 rows
#[tokio::test]
async fn default_limit_is_ten() -> Result<(), StorageError> {
    let (storage, db) = database_storage().await;

    let base = Utc::now();
    for i in 0..12 {
        MessageFactory::new(&db, "s1", "c1")
            .id(format!("m{i}"))
            .created_at(base - Duration::minutes(i))
            .build()
            .await
            .unwrap();
    }

    let page = storage.get_messages(MessageQuery::default()).await?;

    assert_eq!(page.messages.len(), 10);
    assert_eq!(page.total, 12);

    Ok(())
}
