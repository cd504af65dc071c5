//! Configuration management for the demo binary.
//!
//! This module handles loading and validating configuration from environment variables.
//! The library API itself takes no configuration; only `persona-demo` reads it.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How the demo prints records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Person(Name: ..., Age: ...)` rendering
    #[default]
    Text,
    /// Pretty-printed JSON of the full data view
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be 'text' or 'json', got: {}", other)),
        }
    }
}

/// Configuration for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,

    /// Record output format (default: text)
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: one of trace, debug, info, warn, error (default: "warn")
    /// - `PERSONA_OUTPUT`: "text" or "json" (default: "text")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let log_level = Self::parse_log_level("LOG_LEVEL", "warn")?;

        let output = match env::var("PERSONA_OUTPUT") {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "PERSONA_OUTPUT".to_string(),
                    reason,
                })?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Config { log_level, output })
    }

    /// Parse a log level variable with a default value.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_ascii_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}
