//! Entity factories for seeding test databases.
//!
//! Each factory creates one entity with sensible defaults that individual
//! tests override through a builder pattern. Factories insert entity rows
//! directly, bypassing the storage contract, so tests can distinguish
//! "seeded state" from "behavior under test".

pub mod channel;
pub mod command_log;
pub mod helpers;
pub mod message;
pub mod server;
