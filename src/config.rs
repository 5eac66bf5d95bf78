//! Configuration management for the contact application.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use crate::ui::layout::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the contact application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,

    /// Primary window title (default: "ContactApp")
    pub window_title: String,

    /// Primary window width (default: 800)
    pub window_width: u32,

    /// Primary window height (default: 600)
    pub window_height: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_APP_LOG_LEVEL`: trace, debug, info, warn or error (default: "warn")
    /// - `CONTACT_APP_WINDOW_TITLE`: window title (default: "ContactApp")
    /// - `CONTACT_APP_WINDOW_WIDTH`: window width (default: 800)
    /// - `CONTACT_APP_WINDOW_HEIGHT`: window height (default: 600)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("CONTACT_APP_LOG_LEVEL")
            .map(|level| level.trim().to_ascii_lowercase())
            .unwrap_or_else(|_| "warn".to_string());

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_APP_LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        let window_title =
            env::var("CONTACT_APP_WINDOW_TITLE").unwrap_or_else(|_| WINDOW_TITLE.to_string());

        if window_title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_APP_WINDOW_TITLE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let window_width = Self::parse_env_dimension("CONTACT_APP_WINDOW_WIDTH", WINDOW_WIDTH)?;
        let window_height = Self::parse_env_dimension("CONTACT_APP_WINDOW_HEIGHT", WINDOW_HEIGHT)?;

        Ok(Config {
            log_level,
            window_title,
            window_width,
            window_height,
        })
    }

    /// Parse an environment variable as a positive window dimension.
    fn parse_env_dimension(var_name: &str, default: u32) -> ConfigResult<u32> {
        let Ok(val) = env::var(var_name) else {
            return Ok(default);
        };

        match val.trim().parse::<u32>() {
            Ok(0) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be greater than zero".to_string(),
            }),
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            window_title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
        }
    }
}
