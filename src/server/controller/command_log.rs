use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{CommandLogDto, CommandLogQueryDto},
    server::{error::AppError, state::AppState},
};

const DEFAULT_LOG_LIMIT: u64 = 50;

/// `GET /api/logs?limit=` - command execution history, newest first.
pub async fn get_command_logs(
    State(state): State<AppState>,
    Query(query): Query<CommandLogQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let logs: Vec<CommandLogDto> = state
        .storage
        .get_command_logs(query.limit.unwrap_or(DEFAULT_LOG_LIMIT))
        .await?
        .into_iter()
        .map(|log| CommandLogDto {
            id: log.id,
            command: log.command,
            response: log.response,
            executed_at: log.executed_at,
        })
        .collect();

    Ok((StatusCode::OK, Json(logs)))
}
