//! Configuration management for the phone detector bot.
//!
//! This module handles loading and validating configuration from environment variables.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the phone detector bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot authentication token
    pub telegram_token: String,

    /// Deployment environment name (default: "development")
    pub environment: String,

    /// Port for the health endpoint (default: 3000)
    pub health_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `TELEGRAM_TOKEN`: Telegram bot authentication token
    ///
    /// Optional environment variables:
    /// - `ENVIRONMENT`: Deployment environment name (default: "development")
    /// - `HEALTH_PORT`: Health endpoint port (default: 3000)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let telegram_token = env::var("TELEGRAM_TOKEN")
            .map_err(|_| ConfigError::MissingVar("TELEGRAM_TOKEN".to_string()))?;

        if telegram_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "TELEGRAM_TOKEN".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let health_port = Self::parse_env_u16("HEALTH_PORT", 3000)?;

        Ok(Config {
            telegram_token,
            environment,
            health_port,
        })
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}
