use chrono::{DateTime, Utc};

/// A Discord server (guild) the bot archives messages from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl Server {
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            icon: entity.icon,
            joined_at: entity.joined_at,
        }
    }
}

/// Parameters for the topology-sync upsert.
///
/// `joined_at` only applies on first insert; for an existing row the upsert
/// updates the mutable fields (name, icon) and leaves the rest untouched.
#[derive(Clone, Debug)]
pub struct UpsertServerParam {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub joined_at: DateTime<Utc>,
}
