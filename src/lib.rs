//! # phishsim
//!
//! A phishing-awareness campaign tracker built with Axum and SQLite.
//!
//! Operators create campaigns, import recipient lists, and hand out
//! per-recipient tracking links; visiting a link records a click event and
//! shows an educational notice. Reports join recipients to their click
//! counts as downloadable CSV.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Globally unique, unguessable tracking tokens with bounded collision retry
//! - CSV-driven bulk target import (no dedup; every upload enrolls fresh rows)
//! - Append-only click history with on-demand aggregation
//! - Per-request CSV report export with tracking URLs
//! - HTTP Basic operator authentication against injected configuration
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export PHISHSIM_ADMIN_PASS="change-me"
//! export BASE_URL="https://phish.example.com"
//!
//! # Start the service (creates phishsim.db and applies migrations)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthService, CampaignService, ImportService, ReportService, StatsService, TrackingService,
    };
    pub use crate::domain::entities::{Campaign, Click, NewCampaign, NewClick, NewTarget, Target};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
