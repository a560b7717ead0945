//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, CampaignService, ImportService, ReportService, StatsService, TrackingService,
};
use crate::infrastructure::persistence::{
    SqliteCampaignRepository, SqliteStatsRepository, SqliteTargetRepository,
};

/// Campaign service over the SQLite repositories.
pub type CampaignSvc = CampaignService<SqliteCampaignRepository>;
/// Import service over the SQLite repositories.
pub type ImportSvc = ImportService<SqliteCampaignRepository, SqliteTargetRepository>;
/// Tracking service over the SQLite repositories.
pub type TrackingSvc = TrackingService<SqliteTargetRepository, SqliteStatsRepository>;
/// Statistics service over the SQLite repositories.
pub type StatsSvc = StatsService<SqliteStatsRepository>;
/// Report service over the SQLite repositories.
pub type ReportSvc = ReportService<SqliteCampaignRepository, SqliteStatsRepository>;

/// Shared state cloned into every handler.
///
/// Services are stateless beyond their repository handles; each request
/// borrows pool connections only for the duration of its own queries.
#[derive(Clone)]
pub struct AppState {
    pub campaign_service: Arc<CampaignSvc>,
    pub import_service: Arc<ImportSvc>,
    pub tracking_service: Arc<TrackingSvc>,
    pub stats_service: Arc<StatsSvc>,
    pub report_service: Arc<ReportSvc>,
    pub auth_service: Arc<AuthService>,
    /// Public base address used to build exported tracking URLs.
    pub base_url: String,
}

impl AppState {
    /// Wires repositories and services over a shared connection pool.
    pub fn new(
        pool: Arc<SqlitePool>,
        base_url: String,
        admin_user: String,
        admin_pass: String,
    ) -> Self {
        let campaign_repo = Arc::new(SqliteCampaignRepository::new(pool.clone()));
        let target_repo = Arc::new(SqliteTargetRepository::new(pool.clone()));
        let stats_repo = Arc::new(SqliteStatsRepository::new(pool));

        Self {
            campaign_service: Arc::new(CampaignService::new(campaign_repo.clone())),
            import_service: Arc::new(ImportService::new(campaign_repo.clone(), target_repo.clone())),
            tracking_service: Arc::new(TrackingService::new(target_repo, stats_repo.clone())),
            stats_service: Arc::new(StatsService::new(stats_repo.clone())),
            report_service: Arc::new(ReportService::new(campaign_repo, stats_repo)),
            auth_service: Arc::new(AuthService::new(admin_user, admin_pass)),
            base_url,
        }
    }
}
