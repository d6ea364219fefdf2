//! [`PapersHub`]: the state of one browsing session.
//!
//! Owns the store, the render tree, the filter criteria and the view mode,
//! and keeps them consistent: every criteria change re-filters the tree,
//! every applied load rebuilds it, and view changes touch neither.

use std::sync::Arc;

use tracing::debug;

use papers_ingest::{CatalogueSource, LoadError, LoadedCatalogue};

use crate::error::Result;
use crate::filter::{FilterCriteria, FilterField};
use crate::store::{CatalogueStore, LoadOutcome, LoadTicket};
use crate::suggest::DEFAULT_SUGGESTION_LIMIT;
use crate::tree::{FilterSummary, RenderTree};
use crate::view::{ViewMode, ViewModeController};

#[derive(Debug, Clone)]
pub struct PapersHub {
    store: CatalogueStore,
    tree: RenderTree,
    criteria: FilterCriteria,
    view: ViewModeController,
    suggestion_limit: usize,
    summary: FilterSummary,
}

impl Default for PapersHub {
    fn default() -> Self {
        Self::new()
    }
}

impl PapersHub {
    pub fn new() -> Self {
        let store = CatalogueStore::new();
        let tree = RenderTree::build(Arc::clone(store.catalogue()));
        Self {
            store,
            tree,
            criteria: FilterCriteria::default(),
            view: ViewModeController::default(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            summary: FilterSummary::default(),
        }
    }

    #[must_use]
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    #[must_use]
    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.view.set(mode);
        self
    }

    // --- loading ---

    pub fn load(
        &mut self,
        source: &dyn CatalogueSource,
    ) -> std::result::Result<LoadOutcome, LoadError> {
        let outcome = self.store.load(source)?;
        self.after_load(&outcome);
        Ok(outcome)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.store.begin_load()
    }

    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: std::result::Result<LoadedCatalogue, LoadError>,
    ) -> std::result::Result<LoadOutcome, LoadError> {
        let outcome = self.store.complete_load(ticket, result)?;
        self.after_load(&outcome);
        Ok(outcome)
    }

    fn after_load(&mut self, outcome: &LoadOutcome) {
        if let LoadOutcome::Applied { catalogue, .. } = outcome {
            self.tree = RenderTree::build(Arc::clone(catalogue));
            self.refilter();
        }
    }

    // --- filtering ---

    /// Handle a keystroke in the search box: update the search criterion,
    /// re-filter, and return the suggestions to show (none for empty input).
    pub fn search_input(&mut self, text: &str) -> Vec<String> {
        self.criteria.search = text.to_lowercase();
        self.refilter();
        self.store.corpus().query(text, self.suggestion_limit)
    }

    /// Use a picked suggestion as the search term.
    pub fn select_suggestion(&mut self, suggestion: &str) {
        self.criteria.search = suggestion.to_lowercase();
        self.refilter();
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str) {
        self.criteria.set(field, value);
        self.refilter();
    }

    /// [`set_filter`](Self::set_filter) with the field given by name.
    pub fn set_filter_by_name(&mut self, field: &str, value: &str) -> Result<()> {
        let field = field.parse::<FilterField>()?;
        self.set_filter(field, value);
        Ok(())
    }

    pub fn quick_filter(&mut self, token: &str) -> Result<()> {
        self.criteria.apply_quick_filter(token)?;
        self.refilter();
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.summary = self.tree.apply_filter(&self.criteria);
    }

    // --- expansion ---
    //
    // Expansion never touches visibility, so none of these re-filter.

    /// Flip a grade section open or closed; returns the new state.
    pub fn toggle_grade(&mut self, grade: usize) -> Result<bool> {
        self.tree.toggle_grade(grade)
    }

    pub fn set_grade_expanded(&mut self, grade: usize, expanded: bool) -> Result<()> {
        self.tree.set_grade_expanded(grade, expanded)
    }

    /// Flip a subject group open or closed; returns the new state.
    pub fn toggle_subject(&mut self, grade: usize, subject: usize) -> Result<bool> {
        self.tree.toggle_subject(grade, subject)
    }

    pub fn set_subject_expanded(
        &mut self,
        grade: usize,
        subject: usize,
        expanded: bool,
    ) -> Result<()> {
        self.tree.set_subject_expanded(grade, subject, expanded)
    }

    pub fn set_all_expanded(&mut self, expanded: bool) {
        self.tree.set_all_expanded(expanded);
    }

    // --- presentation ---

    pub fn set_view_mode(&mut self, mode: &str) -> Result<ViewMode> {
        self.view.set_mode(mode)
    }

    pub fn handle_shortcut(&mut self, key: char) -> Option<ViewMode> {
        let mode = self.view.handle_shortcut(key);
        if let Some(mode) = mode {
            debug!(%mode, "view shortcut");
        }
        mode
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn store(&self) -> &CatalogueStore {
        &self.store
    }

    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Counts from the most recent filter pass.
    pub fn summary(&self) -> FilterSummary {
        self.summary
    }

    pub fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }
}
