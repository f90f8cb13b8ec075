use sea_orm::entity::prelude::*;

/// An archived chat message.
///
/// Immutable once stored; rows only leave this table through the retention
/// sweep. The primary key is the upstream-assigned message snowflake.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub server_id: String,
    pub channel_id: String,
    pub author_id: String,
    pub author_username: String,
    pub author_discriminator: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
