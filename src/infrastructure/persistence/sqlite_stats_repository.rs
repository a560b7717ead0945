//! SQLite implementation of click recording and aggregation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{CampaignTotals, StatsRepository, TargetClickCount};
use crate::error::AppError;

/// SQLite repository for click events and on-demand aggregation.
pub struct SqliteStatsRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for SqliteStatsRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = sqlx::query_as::<_, Click>(
            r#"
            INSERT INTO clicks (target_id, clicked_at, ip, user_agent)
            VALUES (?, ?, ?, ?)
            RETURNING id, target_id, clicked_at, ip, user_agent
            "#,
        )
        .bind(new_click.target_id)
        .bind(Utc::now())
        .bind(new_click.ip)
        .bind(new_click.user_agent)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(click)
    }

    async fn count_clicks_by_target(&self, target_id: i64) -> Result<i64, AppError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clicks WHERE target_id = ?")
                .bind(target_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }

    async fn campaign_totals(&self, campaign_id: i64) -> Result<CampaignTotals, AppError> {
        let targets =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM targets WHERE campaign_id = ?")
                .bind(campaign_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        let clicks = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM clicks ck
            JOIN targets t ON t.id = ck.target_id
            WHERE t.campaign_id = ?
            "#,
        )
        .bind(campaign_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(CampaignTotals { targets, clicks })
    }

    async fn target_click_counts(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<TargetClickCount>, AppError> {
        let rows = sqlx::query_as::<_, TargetClickCount>(
            r#"
            SELECT
                t.id AS target_id,
                t.name,
                t.email,
                t.token,
                COUNT(ck.id) AS clicks
            FROM targets t
            LEFT JOIN clicks ck ON ck.target_id = t.id
            WHERE t.campaign_id = ?
            GROUP BY t.id
            ORDER BY t.id ASC
            "#,
        )
        .bind(campaign_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
