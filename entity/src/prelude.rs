pub use super::bot_status::Entity as BotStatus;
pub use super::channel::Entity as Channel;
pub use super::command_log::Entity as CommandLog;
pub use super::message::Entity as Message;
pub use super::server::Entity as Server;
