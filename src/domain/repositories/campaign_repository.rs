//! Repository trait for campaign data access.

use crate::domain::entities::{Campaign, NewCampaign};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for campaigns.
///
/// Campaigns are write-once: there is no update or delete surface.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCampaignRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Creates a new campaign.
    ///
    /// The insert is a single statement: a failure leaves no partial row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign, AppError>;

    /// Finds a campaign by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Campaign))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Campaign>, AppError>;

    /// Counts campaigns. Used by the health check as a cheap liveness query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
