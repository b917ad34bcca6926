//! Configuration loading and validation.
//!
//! Settings come from a TOML file (`dealsheet.toml` by default); every
//! section has defaults so the tool also runs from CLI flags alone.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub document: DocumentConfig,
    pub logging: LoggingConfig,
}

/// Source spreadsheet settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path to the tester report workbook (`.xlsx`).
    pub input: PathBuf,
}

/// Output document settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Path the rendered PDF is written to (overwritten if present).
    pub output: PathBuf,
    /// Maximum number of trades per page.
    pub rows_per_page: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("ReportTester.xlsx"),
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("trades.pdf"),
            rows_per_page: 40,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    /// Loads and validates a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config file if it exists, otherwise falls back to defaults.
    ///
    /// CLI overrides are applied after this, so a missing file only matters
    /// when a required path is not supplied on the command line either.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.document.rows_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "document.rows_per_page",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.report.input.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "report.input",
            }
            .into());
        }
        if self.document.output.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "document.output",
            }
            .into());
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
