/// A text channel within a tracked server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub server_id: String,
    pub name: String,
    pub kind: String,
}

impl Channel {
    pub fn from_entity(entity: entity::channel::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            name: entity.name,
            kind: entity.kind,
        }
    }
}

/// Parameters for the topology-sync upsert.
///
/// The referenced server must already exist: topology sync always upserts a
/// server before its channels.
#[derive(Clone, Debug)]
pub struct UpsertChannelParam {
    pub id: String,
    pub server_id: String,
    pub name: String,
    pub kind: String,
}
