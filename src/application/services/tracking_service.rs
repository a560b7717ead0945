//! Public click recording for tracking-link visits.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::NewClick;
use crate::domain::repositories::{StatsRepository, TargetRepository};
use crate::error::AppError;

/// Maximum stored user-agent length, in characters.
const USER_AGENT_MAX_CHARS: usize = 500;

/// The data shown on the educational notice after a recorded visit.
#[derive(Debug, Clone)]
pub struct Visit {
    pub campaign_name: String,
    pub clicked_at: DateTime<Utc>,
}

/// Service behind the public tracking endpoint.
///
/// Resolves a token to its target, appends one click row per visit, and
/// hands back what the notice page needs. Unknown tokens record nothing.
pub struct TrackingService<T: TargetRepository, S: StatsRepository> {
    target_repository: Arc<T>,
    stats_repository: Arc<S>,
}

impl<T: TargetRepository, S: StatsRepository> TrackingService<T, S> {
    /// Creates a new tracking service.
    pub fn new(target_repository: Arc<T>, stats_repository: Arc<S>) -> Self {
        Self {
            target_repository,
            stats_repository,
        }
    }

    /// Records one visit to a tracking link.
    ///
    /// Every call on a known token appends exactly one click row; there is
    /// no dedup or debouncing. The user agent is truncated to 500
    /// characters before storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown token (nothing is
    /// recorded). Returns [`AppError::Internal`] on database errors; click
    /// recording has no retry path.
    pub async fn record_visit(
        &self,
        token: &str,
        ip: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Visit, AppError> {
        let target = self
            .target_repository
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Invalid token", json!({})))?;

        let click = self
            .stats_repository
            .record_click(NewClick {
                target_id: target.id,
                ip,
                user_agent: user_agent.map(truncate_user_agent),
            })
            .await?;

        Ok(Visit {
            campaign_name: target.campaign_name,
            clicked_at: click.clicked_at,
        })
    }
}

fn truncate_user_agent(user_agent: String) -> String {
    if user_agent.chars().count() <= USER_AGENT_MAX_CHARS {
        user_agent
    } else {
        user_agent.chars().take(USER_AGENT_MAX_CHARS).collect()
    }
}
