//! Search suggestions derived from the catalogue.

use std::collections::HashSet;

use tracing::trace;

use papers_model::Catalogue;

/// Number of suggestions shown when the caller does not ask for a limit.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Searchable phrases in first-occurrence order, without duplicates.
///
/// Always rebuilt as a whole from a catalogue; never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionCorpus {
    entries: Vec<String>,
    folded: Vec<String>,
}

impl SuggestionCorpus {
    /// Generate, per grade `g`, subject `s` and paper `p`: `g`, `s`, `"g s"`,
    /// `"s p.year"` and `"g s p.year"`.
    pub fn build(catalogue: &Catalogue) -> Self {
        let mut corpus = Self::default();
        let mut seen = HashSet::new();
        for grade in catalogue.grades() {
            corpus.insert(&mut seen, grade.name().to_string());
            for subject in grade.subjects() {
                corpus.insert(&mut seen, subject.name().to_string());
                corpus.insert(&mut seen, format!("{} {}", grade.name(), subject.name()));
                for paper in subject.papers() {
                    corpus.insert(&mut seen, format!("{} {}", subject.name(), paper.year));
                    corpus.insert(
                        &mut seen,
                        format!("{} {} {}", grade.name(), subject.name(), paper.year),
                    );
                }
            }
        }
        corpus
    }

    fn insert(&mut self, seen: &mut HashSet<String>, entry: String) {
        if seen.insert(entry.clone()) {
            self.folded.push(entry.to_lowercase());
            self.entries.push(entry);
        }
    }

    /// Case-insensitive substring lookup, at most `limit` results in corpus
    /// order. Empty text or a zero limit yields nothing.
    pub fn query(&self, text: &str, limit: usize) -> Vec<String> {
        if text.is_empty() || limit == 0 {
            return Vec::new();
        }
        let needle = text.to_lowercase();
        let matches: Vec<String> = self
            .folded
            .iter()
            .zip(&self.entries)
            .filter(|(folded, _)| folded.contains(&needle))
            .map(|(_, entry)| entry.clone())
            .take(limit)
            .collect();
        trace!(query = text, matches = matches.len(), "suggestion query");
        matches
    }

    /// [`query`](Self::query) with [`DEFAULT_SUGGESTION_LIMIT`].
    pub fn suggest(&self, text: &str) -> Vec<String> {
        self.query(text, DEFAULT_SUGGESTION_LIMIT)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }
}
