// Rust guideline compliant 2026-08-18

//! Configuration management for Treescope.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Treescope behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Segment separator for search expressions.
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level for diagnostic output (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Default expression separator.
fn default_separator() -> char {
    crate::expression::DEFAULT_SEPARATOR
}

/// Default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/treescope.toml`
    /// 3. Environment variables with `TREESCOPE_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory holding `treescope.toml`
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        // Try to load from config file
        let config_path = dir.join("treescope.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_config: Config = toml::from_str(&content)
                .map_err(|e| crate::Error::Config(format!("Invalid config file: {}", e)))?;
            config = file_config;
        }

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TREESCOPE_SEPARATOR` - Expression segment separator (single character)
    /// - `TREESCOPE_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `TREESCOPE_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TREESCOPE_SEPARATOR") {
            let mut chars = val.chars();
            match (chars.next(), chars.next()) {
                (Some(separator), None) => self.separator = separator,
                _ => {
                    return Err(crate::Error::Config(
                        "TREESCOPE_SEPARATOR must be a single character".to_string(),
                    ))
                }
            }
        }

        if let Ok(val) = std::env::var("TREESCOPE_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::Config(
                        "TREESCOPE_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("TREESCOPE_LOG_LEVEL") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// The separator must stay out of the expression grammar: it cannot be
    /// alphanumeric or an identifier character (ids allow `-` and `_`), a
    /// wildcard or keyword marker, a `@child` parenthesis, the expression
    /// delimiter `,`, or whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the separator or log level is invalid.
    fn validate(&self) -> Result<()> {
        let separator = self.separator;
        if separator.is_ascii_alphanumeric()
            || separator.is_whitespace()
            || "*@()-_,".contains(separator)
        {
            return Err(crate::Error::Config(format!(
                "separator '{}' collides with expression syntax",
                separator
            )));
        }

        match self.log_level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(crate::Error::Config(format!(
                    "log_level must be error, warn, info, debug, or trace, got '{}'",
                    other
                )));
            }
        }

        Ok(())
    }

    /// Saves the configuration to `<dir>/treescope.toml`.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory to write `treescope.toml` into
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join("treescope.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
