//! SQLite implementation of campaign repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Campaign, NewCampaign};
use crate::domain::repositories::CampaignRepository;
use crate::error::AppError;

/// SQLite repository for campaign storage and retrieval.
///
/// Uses runtime-checked SQLx queries with bound parameters.
pub struct SqliteCampaignRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCampaignRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampaignRepository for SqliteCampaignRepository {
    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign, AppError> {
        let campaign = sqlx::query_as::<_, Campaign>(
            r#"
            INSERT INTO campaigns (name, description, email_subject, email_html, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, description, email_subject, email_html, created_at
            "#,
        )
        .bind(new_campaign.name)
        .bind(new_campaign.description)
        .bind(new_campaign.email_subject)
        .bind(new_campaign.email_html)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(campaign)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Campaign>, AppError> {
        let campaign = sqlx::query_as::<_, Campaign>(
            r#"
            SELECT id, name, description, email_subject, email_html, created_at
            FROM campaigns
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(campaign)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM campaigns")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
