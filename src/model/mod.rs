//! Wire-format models shared with API consumers.
//!
//! These DTOs define the JSON shapes the dashboard reads and writes. Field
//! names are camelCase on the wire; server-internal param models live in
//! `server::model` and are converted at the controller boundary.

pub mod api;
