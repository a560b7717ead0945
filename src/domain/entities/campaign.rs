//! Campaign entity representing one awareness exercise.

use chrono::{DateTime, Utc};

/// A named awareness exercise with its email template.
///
/// Campaigns are immutable after creation; targets are enrolled against a
/// campaign via bulk import and are never edited or removed.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub email_subject: String,
    pub email_html: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new campaign.
///
/// Field validation (trimming, required fields) happens in
/// [`crate::application::services::CampaignService`] before this struct is
/// built.
#[derive(Debug, Clone)]
pub struct NewCampaign {
    pub name: String,
    pub description: Option<String>,
    pub email_subject: String,
    pub email_html: String,
}
