//! Filter criteria and the paper match predicate.

use std::fmt;
use std::str::FromStr;

use papers_model::Paper;

use crate::error::{ConfigError, Result};

/// Quick filter token that clears every constraint.
pub const QUICK_FILTER_ALL: &str = "all";

/// Label of the question paper link in a rendered entry.
pub const PAPER_LINK_LABEL: &str = "Paper";
/// Label of the memo link in a rendered entry.
pub const MEMO_LINK_LABEL: &str = "Memo";

/// The active filter constraints. An empty field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub grade: String,
    pub subject: String,
    pub year: String,
    pub search: String,
}

/// A discrete filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Grade,
    Subject,
    Year,
}

impl FilterField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Grade => "grade",
            FilterField::Subject => "subject",
            FilterField::Year => "year",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("grade") {
            Ok(FilterField::Grade)
        } else if trimmed.eq_ignore_ascii_case("subject") {
            Ok(FilterField::Subject)
        } else if trimmed.eq_ignore_ascii_case("year") {
            Ok(FilterField::Year)
        } else {
            Err(ConfigError::UnknownFilterField {
                name: s.to_string(),
            })
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field constrains anything.
    pub fn is_empty(&self) -> bool {
        self.grade.is_empty()
            && self.subject.is_empty()
            && self.year.is_empty()
            && self.search.is_empty()
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Grade => self.grade = value,
            FilterField::Subject => self.subject = value,
            FilterField::Year => self.year = value,
        }
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Grade => &self.grade,
            FilterField::Subject => &self.subject,
            FilterField::Year => &self.year,
        }
    }

    /// Reset all criteria, then constrain the grade to `token` unless it is
    /// `"all"`. Separators become spaces: `"grade-10"` → `"grade 10"`.
    ///
    /// A blank token is rejected and leaves the criteria untouched.
    pub fn apply_quick_filter(&mut self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::InvalidFilterToken {
                token: token.to_string(),
            });
        }
        self.clear();
        if token != QUICK_FILTER_ALL {
            self.grade = token.replace(['-', '_'], " ");
        }
        Ok(())
    }

    /// See [`matches`].
    pub fn matches(&self, grade: &str, subject: &str, paper: &Paper) -> bool {
        matches(self, grade, subject, paper)
    }
}

/// Whether a paper, with its grade and subject, passes every constraint.
///
/// Grade and subject are case-insensitive substring tests; year is exact;
/// search looks in the entry text, the grade name, and the subject name.
pub fn matches(criteria: &FilterCriteria, grade: &str, subject: &str, paper: &Paper) -> bool {
    let grade_match = criteria.grade.is_empty() || contains_folded(grade, &criteria.grade);
    let subject_match = criteria.subject.is_empty() || contains_folded(subject, &criteria.subject);
    let year_match = criteria.year.is_empty() || paper.year_label() == criteria.year;
    let search_match = criteria.search.is_empty()
        || contains_folded(&entry_text(subject, paper), &criteria.search)
        || contains_folded(grade, &criteria.search)
        || contains_folded(subject, &criteria.search);

    grade_match && subject_match && year_match && search_match
}

/// The visible text of a rendered paper entry: year, subject, optional
/// type, then the link labels.
pub fn entry_text(subject: &str, paper: &Paper) -> String {
    let mut text = format!("{} {subject}", paper.year);
    if let Some(paper_type) = &paper.paper_type {
        text.push_str(" - ");
        text.push_str(paper_type);
    }
    text.push(' ');
    text.push_str(PAPER_LINK_LABEL);
    if paper.has_memo() {
        text.push(' ');
        text.push_str(MEMO_LINK_LABEL);
    }
    text
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_text_includes_type_and_labels() {
        let paper = Paper::new(2021, "b.pdf")
            .unwrap()
            .with_memo(Some("b-memo.pdf".to_string()))
            .with_paper_type(Some("Paper 2".to_string()));
        assert_eq!(entry_text("Math", &paper), "2021 Math - Paper 2 Paper Memo");
    }

    #[test]
    fn entry_text_without_optional_fields() {
        let paper = Paper::new(2020, "a.pdf").unwrap();
        assert_eq!(entry_text("Math", &paper), "2020 Math Paper");
    }

    #[test]
    fn filter_field_parses_case_insensitively() {
        assert_eq!("Grade".parse::<FilterField>().unwrap(), FilterField::Grade);
        assert_eq!(" year ".parse::<FilterField>().unwrap(), FilterField::Year);
        assert!("search".parse::<FilterField>().is_err());
    }
}
