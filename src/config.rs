//! Application configuration loaded from TOML.
//!
//! Every section is optional; missing keys fall back to their defaults.
//!
//! ```toml
//! [placeholders]
//! no_name = "Sem nome"
//! no_description = "Sem descrição"
//!
//! [search]
//! case_sensitive = false
//!
//! [logging]
//! level = "dailytask=debug"
//!
//! [database]
//! url = "postgres://localhost/dailytask"
//! ```

use crate::project::domain::{Placeholders, SearchMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The configuration is not valid TOML for this schema, or a value
    /// fails validation (for example a blank placeholder).
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The `PostgreSQL` adapter was requested without `[database] url`.
    #[error("database url is not configured")]
    MissingDatabaseUrl,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyTaskConfig {
    /// Fallback text for blank names and descriptions.
    pub placeholders: Placeholders,
    /// Project list search behaviour.
    pub search: SearchConfig,
    /// Log filter used when `RUST_LOG` is unset.
    pub logging: LoggingConfig,
    /// Storage connection settings.
    pub database: DatabaseConfig,
}

/// `[search]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Whether the project filter distinguishes letter case.
    pub case_sensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `dailytask=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

/// `[database]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: Option<String>,
}

impl DailyTaskConfig {
    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, or
    /// [`ConfigError::Parse`] when it is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let contents = std::fs::read_to_string(file).map_err(|source| ConfigError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Returns the search mode selected by `[search] case_sensitive`.
    #[must_use]
    pub const fn search_mode(&self) -> SearchMode {
        if self.search.case_sensitive {
            SearchMode::CaseSensitive
        } else {
            SearchMode::CaseInsensitive
        }
    }

    /// Returns the configured database URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when none is set.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database
            .url
            .as_deref()
            .ok_or(ConfigError::MissingDatabaseUrl)
    }
}
