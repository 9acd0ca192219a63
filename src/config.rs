//! Configuration management for the rolo contact manager.
//!
//! This module handles loading and validating configuration from environment variables.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default address book file, used when a save/load prompt is left
    /// empty (default: "addressbook.json")
    pub book_path: String,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BOOK_PATH`: default address book file (default: "addressbook.json")
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path = Self::parse_env_string("BOOK_PATH", "addressbook.json")?;
        let log_level = Self::parse_env_string("LOG_LEVEL", "warn")?;

        Ok(Config {
            book_path,
            log_level,
        })
    }

    /// Read an environment variable with a default, rejecting blank values.
    fn parse_env_string(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                Ok(val)
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: "addressbook.json".to_string(),
            log_level: "warn".to_string(),
        }
    }
}
