//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! An optional `.env` file is read with `dotenvy`, which does not write to stdout
//! (MCP uses stdout for communication).

use crate::domain::{only_digits, DEFAULT_COUNTRY_CODE};
use crate::error::{ConfigError, ConfigResult};
use crate::models::Theme;
use std::env;

/// Groups a fresh session starts with.
pub const DEFAULT_GROUPS: [&str; 2] = ["Friends", "Work"];

/// Configuration for the contact book server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Country code pre-filled in new contact forms (default: "91")
    pub default_country_code: String,

    /// Whether to start with the sample contacts (default: true)
    pub seed_samples: bool,

    /// Groups available at startup (default: Friends, Work)
    pub groups: Vec<String>,

    /// Initial theme (default: dark)
    pub theme: Theme,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_DEFAULT_COUNTRY_CODE`: 1-3 digit country code (default: 91)
    /// - `CONTACT_BOOK_SEED_SAMPLES`: start with sample contacts (default: true)
    /// - `CONTACT_BOOK_GROUPS`: comma-separated group names (default: Friends,Work)
    /// - `CONTACT_BOOK_THEME`: `light` or `dark` (default: dark)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let default_country_code = match env::var("CONTACT_BOOK_DEFAULT_COUNTRY_CODE") {
            Ok(val) => Self::parse_country_code("CONTACT_BOOK_DEFAULT_COUNTRY_CODE", &val)?,
            Err(_) => DEFAULT_COUNTRY_CODE.to_string(),
        };

        let seed_samples = Self::parse_env_bool("CONTACT_BOOK_SEED_SAMPLES", true)?;

        let groups = match env::var("CONTACT_BOOK_GROUPS") {
            Ok(val) => Self::parse_groups(&val),
            Err(_) => DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect(),
        };

        let theme = match env::var("CONTACT_BOOK_THEME") {
            Ok(val) => val
                .parse::<Theme>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_THEME".to_string(),
                    reason,
                })?,
            Err(_) => Theme::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            default_country_code,
            seed_samples,
            groups,
            theme,
            log_level,
        })
    }

    /// Validate a country code: digits only (a leading '+' is allowed), 1-3 of them.
    fn parse_country_code(var_name: &str, val: &str) -> ConfigResult<String> {
        let trimmed = val.trim().trim_start_matches('+');
        let digits = only_digits(trimmed);
        if digits.is_empty() || digits.len() > 3 || digits.len() != trimmed.len() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be 1-3 digits, got: {}", val),
            });
        }
        Ok(digits)
    }

    /// Parse a comma-separated group list, dropping blanks and duplicates.
    fn parse_groups(val: &str) -> Vec<String> {
        let mut groups: Vec<String> = Vec::new();
        for name in val.split(',').map(str::trim) {
            if !name.is_empty() && !groups.iter().any(|g| g == name) {
                groups.push(name.to_string());
            }
        }
        groups
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            seed_samples: true,
            groups: DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect(),
            theme: Theme::default(),
            log_level: "error".to_string(),
        }
    }
}
