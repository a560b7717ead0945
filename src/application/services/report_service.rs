//! Campaign report export as a CSV artifact.

use std::sync::Arc;

use crate::domain::repositories::{CampaignRepository, StatsRepository};
use crate::error::AppError;
use serde_json::json;

/// Download name offered for exported reports.
pub const REPORT_FILE_NAME: &str = "campaign_report.csv";

const REPORT_HEADER: [&str; 8] = [
    "campaign_id",
    "campaign_name",
    "target_id",
    "target_name",
    "target_email",
    "token",
    "clicks",
    "tracking_url",
];

/// Service that joins a campaign's targets with their click counts into a
/// downloadable CSV report.
///
/// Every export writes into its own request-local buffer, so concurrent
/// exports never touch a shared artifact.
pub struct ReportService<C: CampaignRepository, S: StatsRepository> {
    campaign_repository: Arc<C>,
    stats_repository: Arc<S>,
}

impl<C: CampaignRepository, S: StatsRepository> ReportService<C, S> {
    /// Creates a new report service.
    pub fn new(campaign_repository: Arc<C>, stats_repository: Arc<S>) -> Self {
        Self {
            campaign_repository,
            stats_repository,
        }
    }

    /// Builds the CSV report for a campaign.
    ///
    /// One data row per target, ordered by target id ascending, with
    /// `clicks` defaulting to 0 and `tracking_url` built from the supplied
    /// base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown campaign and
    /// [`AppError::Internal`] on database or encoding errors.
    pub async fn export_campaign(
        &self,
        campaign_id: i64,
        base_url: &str,
    ) -> Result<Vec<u8>, AppError> {
        let campaign = self
            .campaign_repository
            .find_by_id(campaign_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Campaign not found", json!({ "id": campaign_id }))
            })?;

        let rows = self.stats_repository.target_click_counts(campaign_id).await?;

        let base = base_url.trim_end_matches('/');
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(REPORT_HEADER).map_err(csv_error)?;

        for row in rows {
            writer
                .write_record([
                    campaign.id.to_string(),
                    campaign.name.clone(),
                    row.target_id.to_string(),
                    row.name.unwrap_or_default(),
                    row.email,
                    row.token.clone(),
                    row.clicks.to_string(),
                    format!("{base}/t/{}", row.token),
                ])
                .map_err(csv_error)?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::internal("Failed to build report", json!({ "reason": e.to_string() })))
    }
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::internal("Failed to build report", json!({ "reason": e.to_string() }))
}
