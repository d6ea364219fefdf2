use serde::{Deserialize, Serialize};

use crate::error::PaperProblem;

/// Smallest accepted paper year.
pub const MIN_YEAR: i64 = 1000;
/// Largest accepted paper year.
pub const MAX_YEAR: i64 = 9999;

/// A single examination record.
///
/// Deserializing goes through [`Paper::new`], so a decoded paper holds the
/// same guarantees as a constructed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaperRecord")]
pub struct Paper {
    pub year: u16,
    /// Link to the question paper.
    pub paper: String,
    /// Link to the marking memorandum, when one is published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Free-form paper label such as "Paper 1" or "November".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_type: Option<String>,
}

/// Wire shape of a [`Paper`] before validation.
#[derive(Deserialize)]
struct PaperRecord {
    year: i64,
    paper: String,
    #[serde(default)]
    memo: Option<String>,
    #[serde(default)]
    paper_type: Option<String>,
}

impl TryFrom<PaperRecord> for Paper {
    type Error = PaperProblem;

    fn try_from(record: PaperRecord) -> Result<Self, Self::Error> {
        Ok(Paper::new(record.year, record.paper)?
            .with_memo(record.memo)
            .with_paper_type(record.paper_type))
    }
}

impl Paper {
    /// Create a paper, checking the year range and the paper link.
    pub fn new(year: i64, paper: impl Into<String>) -> Result<Self, PaperProblem> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PaperProblem::YearOutOfRange(year));
        }
        let paper = paper.into();
        let trimmed = paper.trim();
        if trimmed.is_empty() {
            return Err(PaperProblem::EmptyPaperUrl);
        }
        Ok(Self {
            // Range checked above.
            year: year as u16,
            paper: trimmed.to_string(),
            memo: None,
            paper_type: None,
        })
    }

    /// Attach a memo link. Blank links are treated as absent.
    #[must_use]
    pub fn with_memo(mut self, memo: Option<String>) -> Self {
        self.memo = non_blank(memo);
        self
    }

    /// Attach a paper type. Blank values are treated as absent.
    #[must_use]
    pub fn with_paper_type(mut self, paper_type: Option<String>) -> Self {
        self.paper_type = non_blank(paper_type);
        self
    }

    pub fn has_memo(&self) -> bool {
        self.memo.is_some()
    }

    pub fn year_label(&self) -> String {
        self.year.to_string()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
