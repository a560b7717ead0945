//! Handler for bulk target upload.

use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use serde_json::json;

use crate::api::dto::import::ImportResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Imports targets for a campaign from an uploaded CSV file.
///
/// # Endpoint
///
/// `POST /campaign/{id}/upload`
///
/// # Request
///
/// Multipart form with the CSV text in a `targets_csv` file field. The file
/// is decoded as UTF-8 with invalid sequences replaced, matching
/// spreadsheet exports of varying provenance.
///
/// # Response
///
/// The count of rows actually persisted (see
/// [`crate::application::services::ImportService`] for the validation and
/// token-conflict rules).
pub async fn upload_targets_handler(
    Path(campaign_id): Path<i64>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, AppError> {
    let mut csv_text = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some("targets_csv") {
            let bytes = field.bytes().await.map_err(multipart_error)?;
            csv_text = Some(String::from_utf8_lossy(&bytes).into_owned());
            break;
        }
    }

    let csv_text = csv_text.ok_or_else(|| {
        AppError::bad_request("Missing 'targets_csv' file field", json!({}))
    })?;

    let imported = state
        .import_service
        .import_targets(campaign_id, &csv_text)
        .await?;

    Ok(Json(ImportResponse {
        campaign_id,
        imported,
    }))
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::bad_request("Invalid multipart payload", json!({ "reason": e.to_string() }))
}
