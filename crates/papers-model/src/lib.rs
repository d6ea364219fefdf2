//! Data model for an examination paper catalogue.
//!
//! A [`Catalogue`] is an ordered tree of grades, each holding ordered
//! subjects, each holding papers in source order.

pub mod catalogue;
pub mod error;
pub mod paper;

pub use catalogue::{Catalogue, CatalogueStats, Grade, Subject};
pub use error::{PaperProblem, Result, ValidationError};
pub use paper::{MAX_YEAR, MIN_YEAR, Paper};
