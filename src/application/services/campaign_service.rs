//! Campaign creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Campaign, NewCampaign};
use crate::domain::repositories::CampaignRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for creating and retrieving campaigns.
///
/// Campaigns are immutable: the only write operation is creation, and a
/// failed insert leaves no partial state.
pub struct CampaignService<C: CampaignRepository> {
    repository: Arc<C>,
}

impl<C: CampaignRepository> CampaignService<C> {
    /// Creates a new campaign service.
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Creates a campaign from raw form input.
    ///
    /// All fields are trimmed. `name`, `email_subject`, and `email_html`
    /// must be non-blank; a blank `description` is stored as `NULL`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the first blank required
    /// field. Returns [`AppError::Internal`] on database errors.
    pub async fn create_campaign(
        &self,
        name: &str,
        description: Option<&str>,
        email_subject: &str,
        email_html: &str,
    ) -> Result<Campaign, AppError> {
        let name = name.trim();
        let email_subject = email_subject.trim();
        let email_html = email_html.trim();

        if name.is_empty() {
            return Err(AppError::bad_request(
                "Campaign name must not be blank",
                json!({ "field": "name" }),
            ));
        }
        if email_subject.is_empty() {
            return Err(AppError::bad_request(
                "Email subject must not be blank",
                json!({ "field": "email_subject" }),
            ));
        }
        if email_html.is_empty() {
            return Err(AppError::bad_request(
                "Email HTML body must not be blank",
                json!({ "field": "email_html" }),
            ));
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from);

        let new_campaign = NewCampaign {
            name: name.to_string(),
            description,
            email_subject: email_subject.to_string(),
            email_html: email_html.to_string(),
        };

        self.repository.create(new_campaign).await
    }

    /// Retrieves a campaign by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no campaign matches the id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_campaign(&self, id: i64) -> Result<Campaign, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Campaign not found", json!({ "id": id })))
    }

    /// Counts campaigns. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_campaigns(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
