use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests inserting a new server.
///
/// Expected: Ok with server created and servers_count 1
#[tokio::test]
async fn inserts_new_server() -> Result<(), StorageError> {
    let (storage, _db) = database_storage().await;

    let server = storage.upsert_server(server_param("s1", "Guild One")).await?;

    assert_eq!(server.id, "s1");
    assert_eq!(server.name, "Guild One");

    let status = storage.get_bot_status().await?;
    assert_eq!(status.servers_count, 1);

    Ok(())
}

/// Tests that a repeated upsert updates the mutable fields in place.
///
/// Name and icon change; joined_at and the row identity are preserved, and
/// no duplicate row appears.
///
/// Expected: Ok with one updated row
#[tokio::test]
async fn updates_mutable_fields_in_place() -> Result<(), StorageError> {
    let (storage, db) = database_storage().await;

    let original = storage.upsert_server(server_param("s1", "Old Name")).await?;

    let mut param = server_param("s1", "New Name");
    param.icon = Some("abcdef".to_string());
    param.joined_at = Utc::now() + Duration::days(1);
    let updated = storage.upsert_server(param).await?;

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.icon, Some("abcdef".to_string()));
    assert_eq!(updated.joined_at, original.joined_at);

    let rows = entity::prelude::Server::find().count(&db).await.unwrap();
    assert_eq!(rows, 1);

    let status = storage.get_bot_status().await?;
    assert_eq!(status.servers_count, 1);

    Ok(())
}

/// Tests clearing the icon on update.
///
/// Expected: Ok with icon set back to None
#[tokio::test]
async fn updates_icon_to_none() -> Result<(), StorageError> {
    let (storage, _db) = database_storage().await;

    let mut with_icon = server_param("s1", "Guild");
    with_icon.icon = Some("abc123".to_string());
    storage.upsert_server(with_icon).await?;

    let updated = storage.upsert_server(server_param("s1", "Guild")).await?;

    assert!(updated.icon.is_none());

    Ok(())
}

/// Tests the not-found contract for lookups.
///
/// Expected: Ok(None), never an error
#[tokio::test]
async fn lookup_of_unknown_server_is_none() -> Result<(), StorageError> {
    let (storage, _db) = database_storage().await;

    assert!(storage.get_server("missing").await?.is_none());

    Ok(())
}
