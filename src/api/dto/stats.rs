//! Response type for campaign statistics.

use serde::Serialize;

use crate::application::services::CampaignStats;

/// Response body for `GET /campaign/{id}/stats`.
///
/// `click_rate` is average clicks per target scaled by 100 and can exceed
/// 100 when targets click more than once.
#[derive(Debug, Serialize)]
pub struct CampaignStatsResponse {
    pub campaign_id: i64,
    pub targets: i64,
    pub clicks: i64,
    pub click_rate: f64,
}

impl CampaignStatsResponse {
    pub fn new(campaign_id: i64, stats: CampaignStats) -> Self {
        Self {
            campaign_id,
            targets: stats.targets,
            clicks: stats.clicks,
            click_rate: stats.click_rate,
        }
    }
}
