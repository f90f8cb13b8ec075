//! Channel factory for creating test channel entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test channels with customizable fields.
///
/// Defaults:
/// - id: auto-incremented counter value as a string
/// - name: `"channel-{id}"`
/// - kind: `"text"`
///
/// The owning server id is required up front since channels always belong to
/// exactly one server.
pub struct ChannelFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    server_id: String,
    name: String,
    kind: String,
}

impl<'a> ChannelFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, server_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            server_id: server_id.to_string(),
            name: format!("channel-{id}"),
            kind: "text".to_string(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::channel::Model, DbErr> {
        entity::channel::ActiveModel {
            id: ActiveValue::Set(self.id),
            server_id: ActiveValue::Set(self.server_id),
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(self.kind),
        }
        .insert(self.db)
        .await
    }
}
