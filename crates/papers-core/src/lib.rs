//! Filtering and rendering engine for an examination paper catalogue.
//!
//! The engine turns a [`Catalogue`](papers_model::Catalogue) into a
//! [`RenderTree`] whose node visibility follows the active
//! [`FilterCriteria`], offers search suggestions from a
//! [`SuggestionCorpus`], and tracks the presentation [`ViewMode`]. No
//! presentation code lives here; a UI reads the tree and draws it.
//!
//! # Example
//!
//! ```
//! use papers_core::{FilterField, PapersHub};
//! use papers_ingest::StaticSource;
//!
//! let mut hub = PapersHub::new();
//! hub.load(&StaticSource::json(
//!     r#"{"Grade 10": {"Math": [{"year": 2020, "paper": "a.pdf"},
//!                               {"year": 2021, "paper": "b.pdf"}]}}"#,
//! ))
//! .unwrap();
//!
//! hub.set_filter(FilterField::Year, "2021");
//! assert_eq!(hub.summary().visible_papers, 1);
//! ```

pub mod error;
pub mod filter;
pub mod hub;
pub mod store;
pub mod suggest;
pub mod tree;
pub mod view;

pub use error::{ConfigError, Result};
pub use filter::{FilterCriteria, FilterField, QUICK_FILTER_ALL, entry_text, matches};
pub use hub::PapersHub;
pub use store::{CatalogueStore, LoadOutcome, LoadTicket};
pub use suggest::{DEFAULT_SUGGESTION_LIMIT, SuggestionCorpus};
pub use tree::{FilterSummary, GradeView, PaperView, RenderTree, SubjectView};
pub use view::{ViewMode, ViewModeController};
