//! HTTP request handlers for the query API.
//!
//! One file per resource. Controllers convert query strings and bodies into
//! storage params, call into services or the storage contract, and map domain
//! models onto the wire DTOs in `crate::model::api`.

pub mod channel;
pub mod command;
pub mod command_log;
pub mod message;
pub mod server;
pub mod stats;
pub mod status;
