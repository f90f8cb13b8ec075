use std::collections::HashMap;

use crate::{
    model::api::{MessageDto, MessagesResponseDto},
    server::{data::Storage, error::AppError, model::MessageQuery},
};

pub struct MessageService<'a> {
    storage: &'a dyn Storage,
}

impl<'a> MessageService<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Runs a filtered, paginated search and enriches each result with its
    /// resolved channel name. Channels that have not been synced yet resolve
    /// to `None` rather than failing the query.
    pub async fn search(&self, query: MessageQuery) -> Result<MessagesResponseDto, AppError> {
        let page = self.storage.get_messages(query).await?;

        let channel_names: HashMap<String, String> = self
            .storage
            .get_channels(None)
            .await?
            .into_iter()
            .map(|channel| (channel.id, channel.name))
            .collect();

        let messages = page
            .messages
            .into_iter()
            .map(|message| {
                let channel_name = channel_names.get(&message.channel_id).cloned();
                MessageDto {
                    id: message.id,
                    server_id: message.server_id,
                    channel_id: message.channel_id,
                    channel_name,
                    author_id: message.author_id,
                    author_username: message.author_username,
                    author_discriminator: message.author_discriminator,
                    content: message.content,
                    created_at: message.created_at,
                }
            })
            .collect();

        Ok(MessagesResponseDto {
            messages,
            total: page.total,
        })
    }
}
