//! `papers-hub.toml` settings.
//!
//! ```toml
//! source = "https://example.org/papers.json"
//! suggestion_limit = 8
//! default_view = "compact"
//! request_timeout_secs = 10
//! ```
//!
//! Every key is optional. Command-line flags win over file values.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use papers_core::{ConfigError, DEFAULT_SUGGESTION_LIMIT, ViewMode};
use papers_ingest::DEFAULT_REQUEST_TIMEOUT;

/// The file as written; validated into [`HubConfig`].
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    source: Option<String>,
    suggestion_limit: Option<usize>,
    default_view: Option<String>,
    request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// Catalogue location used when a command omits one.
    pub source: Option<String>,
    pub suggestion_limit: usize,
    pub default_view: ViewMode,
    pub request_timeout: Duration,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            source: None,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            default_view: ViewMode::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl HubConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("load config {}", path.display()))
    }

    /// `None` means defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text).context("parse config")?;
        Ok(Self::from_file(file)?)
    }

    fn from_file(file: ConfigFile) -> std::result::Result<Self, ConfigError> {
        let defaults = Self::default();
        let default_view = match file.default_view {
            Some(value) => value.parse()?,
            None => defaults.default_view,
        };
        let request_timeout = match file.request_timeout_secs {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    key: "request_timeout_secs".to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
            Some(secs) => Duration::from_secs(secs),
            None => defaults.request_timeout,
        };
        let source = match file.source {
            Some(source) if source.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    key: "source".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            other => other,
        };
        Ok(Self {
            source,
            suggestion_limit: file.suggestion_limit.unwrap_or(defaults.suggestion_limit),
            default_view,
            request_timeout,
        })
    }

    /// The command-line location if given, else the configured one.
    pub fn resolve_source(&self, flag: Option<&str>) -> Result<String> {
        flag.map(str::to_string)
            .or_else(|| self.source.clone())
            .ok_or_else(|| anyhow!("no catalogue source given and none configured"))
    }

    pub fn resolve_view(&self, flag: Option<&str>) -> std::result::Result<ViewMode, ConfigError> {
        flag.map_or(Ok(self.default_view), str::parse)
    }

    pub fn resolve_limit(&self, flag: Option<usize>) -> usize {
        flag.unwrap_or(self.suggestion_limit)
    }
}
