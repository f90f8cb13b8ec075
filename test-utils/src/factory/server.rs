//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// Defaults:
/// - id: auto-incremented counter value as a string
/// - name: `"Server {id}"`
/// - icon: `None`
/// - joined_at: now
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    icon: Option<String>,
    joined_at: chrono::DateTime<Utc>,
}

impl<'a> ServerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            name: format!("Server {id}"),
            icon: None,
            joined_at: Utc::now(),
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

    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }

    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            icon: ActiveValue::Set(self.icon),
            joined_at: ActiveValue::Set(self.joined_at),
        }
        .insert(self.db)
        .await
    }
}
