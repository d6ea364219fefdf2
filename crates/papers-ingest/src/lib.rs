//! Catalogue ingestion: fetch a document, parse it, validate every record.

pub mod document;
pub mod error;
pub mod fingerprint;
pub mod source;

use std::time::Instant;

use tracing::{debug, info_span};

use papers_model::Catalogue;

pub use document::parse_catalogue;
pub use error::{LoadError, Result};
pub use fingerprint::fingerprint;
pub use source::{
    CatalogueSource, DEFAULT_REQUEST_TIMEOUT, FileSource, HttpSource, StaticSource,
    source_from_location,
};

/// A parsed and validated catalogue together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedCatalogue {
    pub catalogue: Catalogue,
    /// SHA-256 of the raw document.
    pub fingerprint: String,
    pub location: String,
}

/// Fetch, parse, and validate a catalogue from `source`.
///
/// Nothing is returned unless the whole document is valid.
pub fn load_catalogue(source: &dyn CatalogueSource) -> Result<LoadedCatalogue> {
    let location = source.describe();
    let span = info_span!("load_catalogue", location = %location);
    let _guard = span.enter();

    let start = Instant::now();
    let bytes = source.fetch()?;
    let catalogue = parse_catalogue(&bytes)?;
    debug!(
        bytes = bytes.len(),
        grades = catalogue.grades().len(),
        papers = catalogue.paper_count(),
        duration_ms = start.elapsed().as_millis(),
        "catalogue parsed"
    );
    Ok(LoadedCatalogue {
        catalogue,
        fingerprint: fingerprint(&bytes),
        location,
    })
}
