//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON shaped
//! like Discord's API payloads, simulating what the gateway would deliver.
//! Use them to exercise handler logic without a live connection.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Serenity Guild objects
//! - `guild::create_test_guild_with_channels` - Guilds carrying text channels
//! - `message::create_test_message` - Serenity Message objects

pub mod guild;
pub mod message;

// Re-export commonly used functions for convenience
pub use guild::{create_test_guild, create_test_guild_with_channels};
pub use message::create_test_message;
