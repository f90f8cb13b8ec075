//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned cheaply for each request via
//! Axum's state extraction. Both fields are reference-counted handles.

use std::sync::Arc;

use crate::server::{bot::manager::BotManager, data::Storage};

#[derive(Clone)]
pub struct AppState {
    /// The storage backend behind the repository contract. Which backend it
    /// is (durable or in-memory) was decided at startup.
    pub storage: Arc<dyn Storage>,

    /// The gateway connection manager, consulted for live connection state
    /// and uptime.
    pub bot: Arc<BotManager>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, bot: Arc<BotManager>) -> Self {
        Self { storage, bot }
    }
}
