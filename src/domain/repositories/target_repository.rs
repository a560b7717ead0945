//! Repository trait for target data access.

use crate::domain::entities::{NewTarget, Target};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Outcome of a target insert attempt.
///
/// Token uniqueness is enforced by the database; a constraint failure on the
/// token column is surfaced as [`TokenConflict`](Self::TokenConflict) so the
/// importer can retry with a fresh token instead of unwinding through an
/// error path.
#[derive(Debug, Clone)]
pub enum TargetInsert {
    Inserted(Target),
    TokenConflict,
}

/// A target joined with its campaign name, as resolved from a tracking
/// token on the public click path.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TargetWithCampaign {
    pub id: i64,
    pub campaign_id: i64,
    pub name: Option<String>,
    pub email: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub campaign_name: String,
}

/// Repository interface for targets.
///
/// Targets are created only in bulk via import and never updated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteTargetRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TargetRepository: Send + Sync {
    /// Attempts to insert a target row.
    ///
    /// # Returns
    ///
    /// - [`TargetInsert::Inserted`] with the persisted row
    /// - [`TargetInsert::TokenConflict`] when the token is already taken
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_target: NewTarget) -> Result<TargetInsert, AppError>;

    /// Finds a target by exact token match, joined with its campaign name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_token(&self, token: &str) -> Result<Option<TargetWithCampaign>, AppError>;
}
