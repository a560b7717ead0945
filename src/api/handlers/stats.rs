//! Handler for campaign statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::CampaignStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns target and click totals plus the click rate for a campaign.
///
/// # Endpoint
///
/// `GET /campaign/{id}/stats`
///
/// Counts are re-derived from the click rows on every call.
///
/// # Errors
///
/// Returns 404 if the campaign does not exist.
pub async fn campaign_stats_handler(
    Path(campaign_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CampaignStatsResponse>, AppError> {
    state.campaign_service.get_campaign(campaign_id).await?;

    let stats = state.stats_service.campaign_stats(campaign_id).await?;

    Ok(Json(CampaignStatsResponse::new(campaign_id, stats)))
}
