//! Handler for campaign creation.

use axum::{Form, Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::api::dto::campaign::{CampaignResponse, CreateCampaignForm};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a campaign from submitted form fields.
///
/// # Endpoint
///
/// `POST /campaign/create`
///
/// # Validation
///
/// `name`, `email_subject`, and `email_html` must be non-blank after
/// trimming; `description` is optional. Validation failures return 400 with
/// the offending field in the error details and no campaign is created.
///
/// # Response
///
/// `201 Created` with the new campaign's id.
pub async fn create_campaign_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateCampaignForm>,
) -> Result<impl IntoResponse, AppError> {
    let campaign = state
        .campaign_service
        .create_campaign(
            &form.name,
            form.description.as_deref(),
            &form.email_subject,
            &form.email_html,
        )
        .await?;

    tracing::info!(campaign_id = campaign.id, "campaign created");

    Ok((StatusCode::CREATED, Json(CampaignResponse::from(campaign))))
}
