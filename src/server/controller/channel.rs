use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ChannelDto, ChannelQueryDto},
    server::{error::AppError, state::AppState},
};

/// `GET /api/channels?serverId=` - tracked channels, optionally filtered to
/// one server.
pub async fn get_channels(
    State(state): State<AppState>,
    Query(query): Query<ChannelQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let channels: Vec<ChannelDto> = state
        .storage
        .get_channels(query.server_id.as_deref())
        .await?
        .into_iter()
        .map(|channel| ChannelDto {
            id: channel.id,
            server_id: channel.server_id,
            name: channel.name,
            kind: channel.kind,
        })
        .collect();

    Ok((StatusCode::OK, Json(channels)))
}
