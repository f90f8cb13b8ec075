use chrono::{DateTime, Utc};

/// Record of one executed bot command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLog {
    pub id: i32,
    pub command: String,
    pub response: String,
    pub executed_at: DateTime<Utc>,
}

impl CommandLog {
    pub fn from_entity(entity: entity::command_log::Model) -> Self {
        Self {
            id: entity.id,
            command: entity.command,
            response: entity.response,
            executed_at: entity.executed_at,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CreateCommandLogParam {
    pub command: String,
    pub response: String,
    pub executed_at: DateTime<Utc>,
}
