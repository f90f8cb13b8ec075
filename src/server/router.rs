use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{channel, command, command_log, message, server, stats, status},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/status", get(status::get_status))
        .route("/api/servers", get(server::get_servers))
        .route("/api/channels", get(channel::get_channels))
        .route("/api/messages", get(message::get_messages))
        .route("/api/stats", get(stats::get_stats))
        .route("/api/logs", get(command_log::get_command_logs))
        .route("/api/execute-command", post(command::execute_command))
}
