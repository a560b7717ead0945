//! Click entity representing a single tracking-link visit.

use chrono::{DateTime, Utc};

/// A click event recorded when a tracking link is visited.
///
/// Clicks are append-only; no dedup, debounce, or rate limiting is applied,
/// so a target visited N times accumulates N rows.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Click {
    pub id: i64,
    pub target_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Input data for recording a new click event.
///
/// Both metadata fields are best-effort; the timestamp is set at insert
/// time by the repository.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub target_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}
