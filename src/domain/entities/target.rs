//! Target entity representing one enrolled recipient.

use chrono::{DateTime, Utc};

/// One recipient enrolled in a campaign.
///
/// The `token` is globally unique across all campaigns (enforced by the
/// database) and is the only identifier exposed in tracking links.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Target {
    pub id: i64,
    pub campaign_id: i64,
    pub name: Option<String>,
    pub email: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for inserting a target row during import.
#[derive(Debug, Clone)]
pub struct NewTarget {
    pub campaign_id: i64,
    pub name: Option<String>,
    pub email: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_target_fields() {
        let new_target = NewTarget {
            campaign_id: 3,
            name: Some("Alice".to_string()),
            email: "a@x.com".to_string(),
            token: "tok123".to_string(),
        };

        assert_eq!(new_target.campaign_id, 3);
        assert_eq!(new_target.name.as_deref(), Some("Alice"));
        assert_eq!(new_target.email, "a@x.com");
    }
}
