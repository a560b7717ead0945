//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `PHISHSIM_ADMIN_PASS` - admin password for the operator endpoints
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://phishsim.db`)
//! - `BASE_URL` - public base address used in exported tracking URLs
//!   (default: `http://localhost:3000`)
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `PHISHSIM_ADMIN_USER` - admin username (default: `admin`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Public base address, without trailing slash. Exported tracking URLs
    /// are `{base_url}/t/{token}`.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Admin username compared by [`crate::application::services::AuthService`].
    pub admin_user: String,
    /// Admin password. Has no default; must be provided by the operator.
    pub admin_pass: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PHISHSIM_ADMIN_PASS` is missing.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://phishsim.db".to_string());

        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let admin_user = env::var("PHISHSIM_ADMIN_USER").unwrap_or_else(|_| "admin".to_string());
        let admin_pass =
            env::var("PHISHSIM_ADMIN_PASS").context("PHISHSIM_ADMIN_PASS must be set")?;

        Ok(Self {
            database_url,
            base_url,
            listen_addr,
            log_level,
            log_format,
            admin_user,
            admin_pass,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a `sqlite:` URL
    /// - `base_url` is not an `http(s)` URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - admin credentials are blank
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.admin_user.is_empty() {
            anyhow::bail!("PHISHSIM_ADMIN_USER must not be empty");
        }

        if self.admin_pass.is_empty() {
            anyhow::bail!("PHISHSIM_ADMIN_PASS must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Admin user: {}", self.admin_user);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
