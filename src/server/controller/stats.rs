use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::server::{error::AppError, service::stats::StatsService, state::AppState};

/// `GET /api/stats` - aggregate archive report.
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let report = StatsService::new(state.storage.as_ref()).report().await?;

    Ok((StatusCode::OK, Json(report)))
}
