//! The grade → subject → paper catalogue.

use std::collections::{BTreeSet, HashSet};

use crate::error::{Result, ValidationError};
use crate::paper::Paper;

/// Papers for one subject within a grade, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    name: String,
    papers: Vec<Paper>,
}

impl Subject {
    pub fn new(name: impl Into<String>, papers: Vec<Paper>) -> Self {
        Self {
            name: name.into(),
            papers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }
}

/// One top-level grade grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    name: String,
    subjects: Vec<Subject>,
}

impl Grade {
    pub fn new(name: impl Into<String>, subjects: Vec<Subject>) -> Self {
        Self {
            name: name.into(),
            subjects,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.name == name)
    }

    pub fn paper_count(&self) -> usize {
        self.subjects.iter().map(|subject| subject.papers.len()).sum()
    }
}

/// An immutable, ordered catalogue of examination papers.
///
/// Grade names are unique across the catalogue and subject names are unique
/// within their grade. Iteration always follows source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    grades: Vec<Grade>,
}

impl Catalogue {
    /// Build a catalogue, rejecting duplicate grade or subject names.
    pub fn new(grades: Vec<Grade>) -> Result<Self> {
        let mut seen_grades = HashSet::new();
        for grade in &grades {
            if !seen_grades.insert(grade.name.as_str()) {
                return Err(ValidationError::DuplicateGrade {
                    name: grade.name.clone(),
                });
            }
            let mut seen_subjects = HashSet::new();
            for subject in &grade.subjects {
                if !seen_subjects.insert(subject.name.as_str()) {
                    return Err(ValidationError::DuplicateSubject {
                        grade: grade.name.clone(),
                        subject: subject.name.clone(),
                    });
                }
            }
        }
        Ok(Self { grades })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn grade(&self, name: &str) -> Option<&Grade> {
        self.grades.iter().find(|grade| grade.name == name)
    }

    /// Every paper together with its grade and subject, in catalogue order.
    pub fn papers(&self) -> impl Iterator<Item = (&Grade, &Subject, &Paper)> {
        self.grades.iter().flat_map(|grade| {
            grade.subjects.iter().flat_map(move |subject| {
                subject.papers.iter().map(move |paper| (grade, subject, paper))
            })
        })
    }

    pub fn paper_count(&self) -> usize {
        self.grades.iter().map(Grade::paper_count).sum()
    }

    /// Distinct subject names across all grades, sorted ascending.
    pub fn distinct_subjects(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .grades
            .iter()
            .flat_map(|grade| grade.subjects.iter().map(|subject| subject.name.as_str()))
            .collect();
        names.into_iter().map(str::to_string).collect()
    }

    /// Distinct paper years, newest first.
    pub fn distinct_years(&self) -> Vec<u16> {
        let years: BTreeSet<u16> = self.papers().map(|(_, _, paper)| paper.year).collect();
        years.into_iter().rev().collect()
    }

    pub fn stats(&self) -> CatalogueStats {
        CatalogueStats::from_catalogue(self)
    }
}

/// Headline counts shown alongside the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogueStats {
    pub total_papers: usize,
    pub total_subjects: usize,
    pub total_grades: usize,
    pub papers_with_memo: usize,
    /// Newest paper year, 0 when the catalogue is empty.
    pub latest_year: u16,
}

impl CatalogueStats {
    pub fn from_catalogue(catalogue: &Catalogue) -> Self {
        let mut stats = Self {
            total_grades: catalogue.grades.len(),
            total_subjects: catalogue.distinct_subjects().len(),
            ..Self::default()
        };
        for (_, _, paper) in catalogue.papers() {
            stats.total_papers += 1;
            if paper.has_memo() {
                stats.papers_with_memo += 1;
            }
            stats.latest_year = stats.latest_year.max(paper.year);
        }
        stats
    }
}
