//! Bulk target import from uploaded recipient lists.

use std::sync::Arc;

use crate::domain::entities::NewTarget;
use crate::domain::repositories::{CampaignRepository, TargetInsert, TargetRepository};
use crate::error::AppError;
use crate::utils::token_generator::{generate_retry_token, generate_token};
use serde_json::json;

/// One validated recipient row: optional display name plus email.
type RecipientRow = (Option<String>, String);

/// Service for importing targets from CSV recipient lists.
///
/// Each imported row gets a freshly issued tracking token. Imports are not
/// idempotent: re-uploading the same list enrolls every recipient again
/// with new tokens.
pub struct ImportService<C: CampaignRepository, T: TargetRepository> {
    campaign_repository: Arc<C>,
    target_repository: Arc<T>,
}

impl<C: CampaignRepository, T: TargetRepository> ImportService<C, T> {
    /// Creates a new import service.
    pub fn new(campaign_repository: Arc<C>, target_repository: Arc<T>) -> Self {
        Self {
            campaign_repository,
            target_repository,
        }
    }

    /// Imports targets for a campaign from CSV text.
    ///
    /// The CSV must carry a header row with an `email` column; a `name`
    /// column is optional and extra columns are ignored. Rows with a blank
    /// email are skipped. The whole file is parsed and validated before the
    /// first insert, so a rejected file imports nothing.
    ///
    /// # Returns
    ///
    /// The number of target rows actually persisted. A row whose token
    /// collides twice in a row is dropped with a warning and does not count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown campaign,
    /// [`AppError::Validation`] for a missing `email` column, malformed CSV,
    /// or zero valid rows, and [`AppError::Internal`] on database errors.
    pub async fn import_targets(&self, campaign_id: i64, csv_text: &str) -> Result<u64, AppError> {
        self.campaign_repository
            .find_by_id(campaign_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Campaign not found", json!({ "id": campaign_id }))
            })?;

        let rows = parse_recipients(csv_text)?;

        let mut inserted = 0u64;
        for (name, email) in rows {
            if self.insert_with_retry(campaign_id, name, &email).await? {
                inserted += 1;
            } else {
                tracing::warn!(
                    campaign_id,
                    email = %email,
                    "dropping target after repeated token conflicts"
                );
            }
        }

        tracing::info!(campaign_id, inserted, "target import finished");
        Ok(inserted)
    }

    /// Inserts one target, retrying exactly once with a longer token on a
    /// uniqueness conflict. Returns whether a row was persisted.
    async fn insert_with_retry(
        &self,
        campaign_id: i64,
        name: Option<String>,
        email: &str,
    ) -> Result<bool, AppError> {
        let mut token = generate_token();

        for attempt in 0..2 {
            let outcome = self
                .target_repository
                .insert(NewTarget {
                    campaign_id,
                    name: name.clone(),
                    email: email.to_string(),
                    token: token.clone(),
                })
                .await?;

            match outcome {
                TargetInsert::Inserted(_) => return Ok(true),
                TargetInsert::TokenConflict if attempt == 0 => {
                    token = generate_retry_token();
                }
                TargetInsert::TokenConflict => break,
            }
        }

        Ok(false)
    }
}

/// Parses and validates CSV text into recipient rows.
fn parse_recipients(csv_text: &str) -> Result<Vec<RecipientRow>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::bad_request("Invalid CSV", json!({ "reason": e.to_string() })))?
        .clone();

    let email_idx = headers.iter().position(|h| h == "email").ok_or_else(|| {
        AppError::bad_request(
            "CSV must declare at least an 'email' column ('name' is optional)",
            json!({ "headers": headers.iter().collect::<Vec<_>>() }),
        )
    })?;
    let name_idx = headers.iter().position(|h| h == "name");

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            AppError::bad_request("Malformed CSV row", json!({ "reason": e.to_string() }))
        })?;

        let email = record.get(email_idx).unwrap_or("").trim();
        if email.is_empty() {
            continue;
        }

        let name = name_idx
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);

        rows.push((name, email.to_string()));
    }

    if rows.is_empty() {
        return Err(AppError::bad_request(
            "No valid targets found in CSV",
            json!({}),
        ));
    }

    Ok(rows)
}
