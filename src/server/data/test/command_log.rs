use super::*;

/// Tests newest-first retrieval with insertion-order tie-breaking.
///
/// Two entries share an executed_at; the later-inserted one (higher id) must
/// come first.
///
/// Expected: strict executed_at descending, id descending on ties
#[tokio::test]
async fn returns_newest_first_with_id_tiebreak() -> Result<(), StorageError> {
    let (storage, _db) = database_storage().await;

    let base = Utc::now();
    storage.create_command_log(log_param("!oldest", base)).await?;
    storage
        .create_command_log(log_param("!tied-first", base + Duration::seconds(5)))
        .await?;
    storage
        .create_command_log(log_param("!tied-second", base + Duration::seconds(5)))
        .await?;

    let logs = storage.get_command_logs(10).await?;

    let commands: Vec<&str> = logs.iter().map(|log| log.command.as_str()).collect();
    assert_eq!(commands, vec!["!tied-second", "!tied-first", "!oldest"]);

    Ok(())
}

/// Tests the retrieval limit.
///
/// Expected: at most `limit` entries, the newest ones
#[tokio::test]
async fn respects_limit() -> Result<(), StorageError> {
    let (storage, _db) = database_storage().await;

    let base = Utc::now();
    for i in 0..5 {
        storage
            .create_command_log(log_param(&format!("!cmd-{i}"), base + Duration::seconds(i)))
            .await?;
    }

    let logs = storage.get_command_logs(2).await?;

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].command, "!cmd-4");
    assert_eq!(logs[1].command, "!cmd-3");

    Ok(())
}

/// Tests the bounded-retention trim.
///
/// Inserting five entries past the cap drops the five oldest; the newest
/// thousand survive in order.
///
/// Expected: exactly COMMAND_LOG_CAP entries, oldest ones gone
#[tokio::test]
async fn trims_to_newest_cap() -> Result<(), StorageError> {
    let (storage, _db) = database_storage().await;

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
