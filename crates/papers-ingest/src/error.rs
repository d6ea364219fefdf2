//! Error types for catalogue loading.

use std::path::PathBuf;
use thiserror::Error;

use papers_model::ValidationError;

/// Errors that can occur while fetching or parsing a catalogue document.
#[derive(Debug, Error)]
pub enum LoadError {
    // === Transport Errors ===
    /// Failed to read a local document.
    #[error("failed to read catalogue {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network request failed, including request timeouts.
    #[error("failed to fetch catalogue from {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("catalogue request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // === Document Errors ===
    /// Not JSON, or not shaped as grade → subject → list of records.
    #[error("malformed catalogue document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed document containing an invalid record.
    #[error("invalid catalogue: {0}")]
    Validation(#[from] ValidationError),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the document was fetched but failed record validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True when the failure happened before any bytes were parsed.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Network { .. } | Self::HttpStatus { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
