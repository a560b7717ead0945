//! Request and response types for campaign creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Campaign;

/// Form payload for `POST /campaign/create`.
#[derive(Debug, Deserialize)]
pub struct CreateCampaignForm {
    pub name: String,
    pub description: Option<String>,
    pub email_subject: String,
    pub email_html: String,
}

/// Response body for a created campaign.
#[derive(Debug, Serialize)]
pub struct CampaignResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub email_subject: String,
    pub created_at: DateTime<Utc>,
}

impl From<Campaign> for CampaignResponse {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id,
            name: campaign.name,
            description: campaign.description,
            email_subject: campaign.email_subject,
            created_at: campaign.created_at,
        }
    }
}
