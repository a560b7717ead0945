//! Response type for target imports.

use serde::Serialize;

/// Response body for `POST /campaign/{id}/upload`.
///
/// `imported` counts rows actually persisted, which may be lower than the
/// number of rows in the uploaded file (blank emails are skipped).
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub campaign_id: i64,
    pub imported: u64,
}
