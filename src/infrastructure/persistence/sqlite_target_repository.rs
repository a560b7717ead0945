//! SQLite implementation of target repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewTarget, Target};
use crate::domain::repositories::{TargetInsert, TargetRepository, TargetWithCampaign};
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_token;

/// SQLite repository for target storage and token lookups.
///
/// The `token` column carries a UNIQUE constraint; insert attempts that
/// collide are reported as [`TargetInsert::TokenConflict`] rather than an
/// error.
pub struct SqliteTargetRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTargetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TargetRepository for SqliteTargetRepository {
    async fn insert(&self, new_target: NewTarget) -> Result<TargetInsert, AppError> {
        let result = sqlx::query_as::<_, Target>(
            r#"
            INSERT INTO targets (campaign_id, name, email, token, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, campaign_id, name, email, token, created_at
            "#,
        )
        .bind(new_target.campaign_id)
        .bind(new_target.name)
        .bind(new_target.email)
        .bind(new_target.token)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(target) => Ok(TargetInsert::Inserted(target)),
            Err(e) if is_unique_violation_on_token(&e) => Ok(TargetInsert::TokenConflict),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<TargetWithCampaign>, AppError> {
        let target = sqlx::query_as::<_, TargetWithCampaign>(
            r#"
            SELECT
                t.id,
                t.campaign_id,
                t.name,
                t.email,
                t.token,
                t.created_at,
                c.name AS campaign_name
            FROM targets t
            JOIN campaigns c ON c.id = t.campaign_id
            WHERE t.token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(target)
    }
}
