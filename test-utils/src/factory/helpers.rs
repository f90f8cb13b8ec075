//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server together with one of its channels.
///
/// Convenience for tests that only need a valid topology to hang messages on.
///
/// # Returns
/// - `Ok((server, channel))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_channel(
    db: &DatabaseConnection,
) -> Result<(entity::server::Model, entity::channel::Model), DbErr> {
    let server = crate::factory::server::ServerFactory::new(db).build().await?;
    let channel = crate::factory::channel::ChannelFactory::new(db, &server.id)
        .build()
        .await?;

    Ok((server, channel))
}
