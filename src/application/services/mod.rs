mod auth_service;
mod campaign_service;
mod import_service;
mod report_service;
mod stats_service;
mod tracking_service;

pub use auth_service::AuthService;
pub use campaign_service::CampaignService;
pub use import_service::ImportService;
pub use report_service::{REPORT_FILE_NAME, ReportService};
pub use stats_service::{CampaignStats, StatsService, click_rate};
pub use tracking_service::{TrackingService, Visit};
