use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub reports: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Origin the console UI is served from
    pub cors_allowed_origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Hard ceiling on rows returned by the transaction/payment export
    /// queries; wide ranges are truncated rather than streamed unbounded.
    pub max_export_rows: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            reports: ReportConfig {
                max_export_rows: env::var("REPORT_MAX_EXPORT_ROWS")
                    .unwrap_or_else(|_| "10000".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid REPORT_MAX_EXPORT_ROWS".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.reports.max_export_rows == 0 {
            return Err(AppError::Configuration(
                "Report export row cap must be greater than 0".to_string(),
            ));
        }

        if self.app.cors_allowed_origin.trim().is_empty() {
            return Err(AppError::Configuration(
                "CORS allowed origin must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
