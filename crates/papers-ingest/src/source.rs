//! Where catalogue documents come from.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use crate::error::{LoadError, Result};

/// Default HTTP request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A transport able to produce the raw bytes of a catalogue document.
pub trait CatalogueSource {
    /// Fetch the whole document.
    fn fetch(&self) -> Result<Vec<u8>>;

    /// Human-readable location, used in logs and notifications.
    fn describe(&self) -> String;
}

/// A document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogueSource for FileSource {
    fn fetch(&self) -> Result<Vec<u8>> {
        debug!(path = %self.path.display(), "reading catalogue file");
        std::fs::read(&self.path).map_err(|e| LoadError::io(&self.path, e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A document served over HTTP(S).
///
/// A request that outlives the timeout fails as [`LoadError::Network`], the
/// same way a refused connection does.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| LoadError::Network {
                url: url.clone(),
                source,
            })?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogueSource for HttpSource {
    fn fetch(&self) -> Result<Vec<u8>> {
        debug!(url = %self.url, "fetching catalogue");
        let network = |source| LoadError::Network {
            url: self.url.clone(),
            source,
        };
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, concat!("papers-hub/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().map_err(network)?;
        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// An in-memory document.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    bytes: Vec<u8>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Convenience for inline JSON.
    pub fn json(document: &str) -> Self {
        Self::new("<inline>", document.as_bytes())
    }
}

impl CatalogueSource for StaticSource {
    fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// Pick a transport for a location string: HTTP(S) URLs go over the
/// network, anything else is a file path.
pub fn source_from_location(
    location: &str,
    timeout: Duration,
) -> Result<Box<dyn CatalogueSource>> {
    if is_http_url(location) {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

fn is_http_url(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
