//! Catalogue store: the loaded catalogue and everything derived from it.
//!
//! Loads are two-phase. [`CatalogueStore::begin_load`] hands out a
//! [`LoadTicket`] with a fresh generation; [`CatalogueStore::complete_load`]
//! applies the result only if that generation is newer than the one already
//! applied. A slow load that finishes after a newer one is discarded.

use std::sync::Arc;

use tracing::{info, warn};

use papers_ingest::{CatalogueSource, LoadError, LoadedCatalogue, load_catalogue};
use papers_model::{Catalogue, CatalogueStats, Grade};

use crate::suggest::SuggestionCorpus;

/// Pairs the start of a load with its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a completed load.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The catalogue replaced the previous one.
    Applied {
        generation: u64,
        catalogue: Arc<Catalogue>,
        fingerprint: String,
        /// False when the document is byte-identical to the previous one.
        changed: bool,
    },
    /// A newer load had already been applied; this result was dropped.
    Stale { generation: u64, current: u64 },
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied { .. })
    }
}

/// Derived lookups, replaced together with the catalogue.
#[derive(Debug, Clone, Default)]
struct Derived {
    corpus: SuggestionCorpus,
    subjects: Vec<String>,
    years: Vec<u16>,
    stats: CatalogueStats,
}

impl Derived {
    fn from_catalogue(catalogue: &Catalogue) -> Self {
        Self {
            corpus: SuggestionCorpus::build(catalogue),
            subjects: catalogue.distinct_subjects(),
            years: catalogue.distinct_years(),
            stats: catalogue.stats(),
        }
    }
}

/// Holds the current catalogue. Starts empty.
#[derive(Debug, Clone, Default)]
pub struct CatalogueStore {
    catalogue: Arc<Catalogue>,
    derived: Derived,
    fingerprint: Option<String>,
    location: Option<String>,
    issued_generation: u64,
    applied_generation: u64,
}

impl CatalogueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch, validate, and apply a catalogue in one step.
    ///
    /// On error the previous catalogue stays in place.
    pub fn load(&mut self, source: &dyn CatalogueSource) -> Result<LoadOutcome, LoadError> {
        let ticket = self.begin_load();
        let result = load_catalogue(source);
        self.complete_load(ticket, result)
    }

    /// Start a load and get its ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_generation += 1;
        LoadTicket {
            generation: self.issued_generation,
        }
    }

    /// Finish a load started with [`begin_load`](Self::begin_load).
    ///
    /// Results for tickets older than the applied catalogue are discarded,
    /// failed or not. A failure for a current ticket is returned and leaves
    /// the store untouched.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<LoadedCatalogue, LoadError>,
    ) -> Result<LoadOutcome, LoadError> {
        if ticket.generation <= self.applied_generation {
            warn!(
                generation = ticket.generation,
                current = self.applied_generation,
                "discarding stale catalogue load"
            );
            return Ok(LoadOutcome::Stale {
                generation: ticket.generation,
                current: self.applied_generation,
            });
        }
        let loaded = match result {
            Ok(loaded) => loaded,
            Err(error) => {
                warn!(generation = ticket.generation, %error, "catalogue load rejected");
                return Err(error);
            }
        };
        Ok(self.apply(ticket.generation, loaded))
    }

    fn apply(&mut self, generation: u64, loaded: LoadedCatalogue) -> LoadOutcome {
        let LoadedCatalogue {
            catalogue,
            fingerprint,
            location,
        } = loaded;
        let changed = self.fingerprint.as_deref() != Some(fingerprint.as_str());
        let catalogue = Arc::new(catalogue);

        self.derived = Derived::from_catalogue(&catalogue);
        self.catalogue = Arc::clone(&catalogue);
        self.fingerprint = Some(fingerprint.clone());
        self.location = Some(location);
        self.applied_generation = generation;

        info!(
            generation,
            grades = catalogue.grades().len(),
            papers = self.derived.stats.total_papers,
            suggestions = self.derived.corpus.len(),
            changed,
            "catalogue applied"
        );
        LoadOutcome::Applied {
            generation,
            catalogue,
            fingerprint,
            changed,
        }
    }

    pub fn catalogue(&self) -> &Arc<Catalogue> {
        &self.catalogue
    }

    pub fn corpus(&self) -> &SuggestionCorpus {
        &self.derived.corpus
    }

    /// Grade names in catalogue order.
    pub fn grades(&self) -> Vec<&str> {
        self.catalogue.grades().iter().map(Grade::name).collect()
    }

    /// Distinct subjects, sorted ascending.
    pub fn subjects(&self) -> &[String] {
        &self.derived.subjects
    }

    /// Distinct years, newest first.
    pub fn years(&self) -> &[u16] {
        &self.derived.years
    }

    pub fn stats(&self) -> CatalogueStats {
        self.derived.stats
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Generation of the applied catalogue; 0 before the first load.
    pub fn generation(&self) -> u64 {
        self.applied_generation
    }

    pub fn is_loaded(&self) -> bool {
        self.applied_generation > 0
    }
}
