mod campaigns;
mod email_preview;
mod export;
mod health;
mod stats;
mod track;
mod upload;

pub use campaigns::create_campaign_handler;
pub use email_preview::email_preview_handler;
pub use export::export_campaign_handler;
pub use health::health_handler;
pub use stats::campaign_stats_handler;
pub use track::track_handler;
pub use upload::upload_targets_handler;
