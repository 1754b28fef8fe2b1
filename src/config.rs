//! Server configuration and environment variable handling.

use std::env;
use std::path::PathBuf;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the daily table CSV export
    pub daily_data: PathBuf,
    /// Path to the hourly table CSV export
    pub hourly_data: PathBuf,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl AppConfig {
    /// Create a new configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `DAILY_DATA` (required): path to the daily table CSV export
    /// - `HOURLY_DATA` (required): path to the hourly table CSV export
    /// - `HOST` (optional, default: 0.0.0.0): server host
    /// - `PORT` (optional, default: 8080): server port
    ///
    /// # Errors
    /// Returns an error if required variables are not set.
    pub fn from_env() -> Result<Self, String> {
        let daily_data = env::var("DAILY_DATA")
            .map_err(|_| "DAILY_DATA environment variable not set".to_string())?;
        let hourly_data = env::var("HOURLY_DATA")
            .map_err(|_| "HOURLY_DATA environment variable not set".to_string())?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;

        Ok(Self {
            daily_data: PathBuf::from(daily_data),
            hourly_data: PathBuf::from(hourly_data),
            host,
            port,
        })
    }
}
