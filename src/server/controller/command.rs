use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::api::{ExecuteCommandDto, ExecuteCommandResponseDto},
    server::{
        error::AppError,
        model::CreateCommandLogParam,
        service::command::{CommandService, COMMAND_PREFIX},
        state::AppState,
    },
};

/// `POST /api/execute-command` - manual command execution from the dashboard.
///
/// Rejects input without the command prefix (400) and any command while the
/// ingestion connection is down (503). Every attempt is recorded in the
/// command log, whether it succeeded or not.
pub async fn execute_command(
    State(state): State<AppState>,
    Json(payload): Json<ExecuteCommandDto>,
) -> Result<impl IntoResponse, AppError> {
    let command = payload.command.trim().to_string();

    if !command.starts_with(COMMAND_PREFIX) {
        let error = format!("Commands must start with the {COMMAND_PREFIX} prefix");
        record_log(&state, &command, &error).await;
        return Err(AppError::BadRequest(error));
    }

    if !state.bot.is_connected().await {
        let error = "Bot is not connected to Discord".to_string();
        record_log(&state, &command, &error).await;
        return Err(AppError::Unavailable(error));
    }

    match CommandService::new(state.storage.as_ref())
        .execute(&command)
        .await
    {
        Ok(response) => {
            record_log(&state, &command, &response).await;
            Ok((
                StatusCode::OK,
                Json(ExecuteCommandResponseDto { response }),
            ))
        }
        Err(e) => {
            record_log(&state, &command, &e.to_string()).await;
            Err(e)
        }
    }
}

/// The command log must capture failures too, so logging errors are
/// swallowed here rather than masking the original outcome.
async fn record_log(state: &AppState, command: &str, response: &str) {
    let param = CreateCommandLogParam {
        command: command.to_string(),
        response: response.to_string(),
        executed_at: Utc::now(),
    };

    if let Err(e) = state.storage.create_command_log(param).await {
        tracing::error!("Failed to record command log: {e}");
    }
}
