use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::MessageQueryDto,
    server::{
        error::AppError, model::MessageQuery, service::message::MessageService, state::AppState,
    },
};

/// `GET /api/messages?serverId=&channelId=&search=&limit=&offset=` -
/// filtered, paginated message search with resolved channel names.
pub async fn get_messages(
    State(state): State<AppState>,
    Query(query): Query<MessageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let defaults = MessageQuery::default();

    let response = MessageService::new(state.storage.as_ref())
        .search(MessageQuery {
            server_id: query.server_id,
            channel_id: query.channel_id,
            search: query.search,
            limit: query.limit.unwrap_or(defaults.limit),
            offset: query.offset.unwrap_or(defaults.offset),
        })
        .await?;

    Ok((StatusCode::OK, Json(response)))
}
