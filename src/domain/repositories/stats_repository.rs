//! Repository trait for click recording and aggregation.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Per-campaign totals, re-derived on demand from the clicks table.
///
/// `clicks` is the number of click rows across all of the campaign's
/// targets (repeat visits included), not the number of distinct targets
/// that clicked.
#[derive(Debug, Clone, Copy)]
pub struct CampaignTotals {
    pub targets: i64,
    pub clicks: i64,
}

/// One target with its aggregated click count, as exported in reports.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TargetClickCount {
    pub target_id: i64,
    pub name: Option<String>,
    pub email: String,
    pub token: String,
    pub clicks: i64,
}

/// Repository interface for click tracking and statistics.
///
/// Counts are always computed from the click rows; no cached counters
/// exist to drift out of sync.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStatsRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Records a new click event with the current UTC timestamp.
    ///
    /// The write is a single atomic insert; the row exists exactly when the
    /// call returns success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts click rows referencing a target.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_clicks_by_target(&self, target_id: i64) -> Result<i64, AppError>;

    /// Computes target and click totals for a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn campaign_totals(&self, campaign_id: i64) -> Result<CampaignTotals, AppError>;

    /// Lists a campaign's targets with their click counts, ordered by
    /// target id ascending. Targets without clicks appear with a count of 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn target_click_counts(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<TargetClickCount>, AppError>;
}
