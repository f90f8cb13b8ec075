//! Domain models and operation parameter types.
//!
//! These types are what the storage contract speaks: entity models from the
//! database backend are converted into them at the data-layer boundary, and
//! the in-memory backend stores them directly. Controllers convert them into
//! wire DTOs.

pub mod bot_status;
pub mod channel;
pub mod command_log;
pub mod message;
pub mod server;

pub use bot_status::{BotStatus, BotStatusUpdate};
pub use channel::{Channel, UpsertChannelParam};
pub use command_log::{CommandLog, CreateCommandLogParam};
pub use message::{CreateMessageParam, Message, MessagePage, MessageQuery};
pub use server::{Server, UpsertServerParam};
