use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::StatusDto,
    server::{error::AppError, state::AppState},
};

/// `GET /api/status` - the persisted status row plus live connection state.
pub async fn get_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let status = state.storage.get_bot_status().await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            is_online: status.is_online,
            uptime_started: status.uptime_started,
            servers_count: status.servers_count,
            channels_count: status.channels_count,
            messages_count: status.messages_count,
            storage_usage: status.storage_usage,
            uptime: state.bot.uptime().await,
            is_connected: state.bot.is_connected().await,
        }),
    ))
}
