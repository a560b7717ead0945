//! Click aggregation service.

use std::sync::Arc;

use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// Aggregated campaign statistics, computed on demand.
#[derive(Debug, Clone, Copy)]
pub struct CampaignStats {
    pub targets: i64,
    pub clicks: i64,
    pub click_rate: f64,
}

/// Computes the campaign click rate.
///
/// Defined as average clicks per target scaled by 100, so repeat clickers
/// can push it above 100. Campaigns without targets report 0.0.
pub fn click_rate(clicks: i64, targets: i64) -> f64 {
    if targets > 0 {
        clicks as f64 / targets as f64 * 100.0
    } else {
        0.0
    }
}

/// Service for per-target and per-campaign click statistics.
///
/// All counts are re-derived from the click rows on every call; no cached
/// counters exist.
pub struct StatsService<S: StatsRepository> {
    repository: Arc<S>,
}

impl<S: StatsRepository> StatsService<S> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Counts clicks recorded for one target.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn clicks_for_target(&self, target_id: i64) -> Result<i64, AppError> {
        self.repository.count_clicks_by_target(target_id).await
    }

    /// Computes totals and click rate for a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn campaign_stats(&self, campaign_id: i64) -> Result<CampaignStats, AppError> {
        let totals = self.repository.campaign_totals(campaign_id).await?;

        Ok(CampaignStats {
            targets: totals.targets,
            clicks: totals.clicks,
            click_rate: click_rate(totals.clicks, totals.targets),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{CampaignTotals, MockStatsRepository};

    #[test]
    fn test_click_rate_basic() {
        assert_eq!(click_rate(3, 2), 150.0);
        assert_eq!(click_rate(1, 4), 25.0);
    }

    #[test]
    fn test_click_rate_no_targets() {
        assert_eq!(click_rate(0, 0), 0.0);
        assert_eq!(click_rate(5, 0), 0.0);
    }

    #[test]
    fn test_click_rate_can_exceed_hundred() {
        assert_eq!(click_rate(10, 3), 1000.0 / 3.0);
        assert!(click_rate(10, 3) > 100.0);
    }

    #[tokio::test]
    async fn test_campaign_stats() {
        let mut mock_repo = MockStatsRepository::new();

        mock_repo
            .expect_campaign_totals()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| {
                Ok(CampaignTotals {
                    targets: 2,
                    clicks: 3,
                })
            });

        let service = StatsService::new(Arc::new(mock_repo));

        let stats = service.campaign_stats(7).await.unwrap();

        assert_eq!(stats.targets, 2);
        assert_eq!(stats.clicks, 3);
        assert_eq!(stats.click_rate, 150.0);
    }

    #[tokio::test]
    async fn test_clicks_for_target() {
        let mut mock_repo = MockStatsRepository::new();

        mock_repo
            .expect_count_clicks_by_target()
            .times(1)
            .returning(|_| Ok(4));

        let service = StatsService::new(Arc::new(mock_repo));

        assert_eq!(service.clicks_for_target(1).await.unwrap(), 4);
    }
}
