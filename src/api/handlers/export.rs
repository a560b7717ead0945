//! Handler for campaign report download.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::application::services::REPORT_FILE_NAME;
use crate::error::AppError;
use crate::state::AppState;

/// Streams the campaign report as a CSV attachment.
///
/// # Endpoint
///
/// `GET /campaign/{id}/export`
///
/// The artifact is built per request in memory and handed straight to the
/// response body; nothing is written to a shared path, so concurrent
/// exports cannot clobber each other.
///
/// # Errors
///
/// Returns 404 if the campaign does not exist.
pub async fn export_campaign_handler(
    Path(campaign_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let csv_bytes = state
        .report_service
        .export_campaign(campaign_id, &state.base_url)
        .await?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
        ),
    ];

    Ok((headers, csv_bytes).into_response())
}
