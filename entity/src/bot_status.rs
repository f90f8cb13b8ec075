use sea_orm::entity::prelude::*;

/// Singleton status row (id is always 1).
///
/// The counters are derived caches recomputed by the storage layer after every
/// mutating call that affects them; readers never see a half-applied update.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bot_status")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub is_online: bool,
    pub uptime_started: Option<DateTimeUtc>,
    pub servers_count: i64,
    pub channels_count: i64,
    pub messages_count: i64,
    pub storage_usage: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
