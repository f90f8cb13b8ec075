//! Command log factory for creating test log entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test command log entries with customizable fields.
///
/// Defaults:
/// - command: `"!help"`
/// - response: `"Response {id}"`
/// - executed_at: now
pub struct CommandLogFactory<'a> {
    db: &'a DatabaseConnection,
    command: String,
    response: String,
    executed_at: DateTime<Utc>,
}

impl<'a> CommandLogFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            command: "!help".to_string(),
            response: format!("Response {id}"),
            executed_at: Utc::now(),
        }
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    pub fn executed_at(mut self, executed_at: DateTime<Utc>) -> Self {
        self.executed_at = executed_at;
        self
    }

    pub async fn build(self) -> Result<entity::command_log::Model, DbErr> {
        entity::command_log::ActiveModel {
            command: ActiveValue::Set(self.command),
            response: ActiveValue::Set(self.response),
            executed_at: ActiveValue::Set(self.executed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
