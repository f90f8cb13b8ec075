//! Discord gateway integration.
//!
//! `manager` owns the single ingestion connection's lifecycle (start, stop,
//! uptime) and the retention scheduler armed alongside it. `handler` holds
//! the event handlers the gateway dispatches into.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - guild and channel topology events
//! - `GUILD_MESSAGES` - message events in guild channels
//! - `MESSAGE_CONTENT` - message text (privileged intent, must be enabled in
//!   the Discord Developer Portal)

pub mod handler;
pub mod manager;
