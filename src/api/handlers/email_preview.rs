//! Handler for campaign email preview.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Template for the email preview page.
///
/// Renders `templates/email_preview.html` with the campaign's subject and
/// its raw HTML body (operator-authored, rendered unescaped).
#[derive(Template, WebTemplate)]
#[template(path = "email_preview.html")]
struct EmailPreviewTemplate {
    email_subject: String,
    email_html: String,
}

/// Renders a read-only preview of the campaign's email template.
///
/// # Endpoint
///
/// `GET /email/{id}`
///
/// # Errors
///
/// Returns 404 if the campaign does not exist.
pub async fn email_preview_handler(
    Path(campaign_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let campaign = state.campaign_service.get_campaign(campaign_id).await?;

    Ok(EmailPreviewTemplate {
        email_subject: campaign.email_subject,
        email_html: campaign.email_html,
    })
}
