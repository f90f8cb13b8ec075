use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::ServerDto,
    server::{error::AppError, state::AppState},
};

/// `GET /api/servers` - every server the archive knows about.
pub async fn get_servers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let servers: Vec<ServerDto> = state
        .storage
        .get_servers()
        .await?
        .into_iter()
        .map(|server| ServerDto {
            id: server.id,
            name: server.name,
            icon: server.icon,
            joined_at: server.joined_at,
        })
        .collect();

    Ok((StatusCode::OK, Json(servers)))
}
