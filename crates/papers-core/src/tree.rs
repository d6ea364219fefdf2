//! The render tree: grade sections → subject groups → paper entries.
//!
//! Nodes only hold flags and positions; the names and records they stand for
//! live in the shared [`Catalogue`] and are reached through the borrowed
//! views ([`GradeView`], [`SubjectView`], [`PaperView`]). The tree is built
//! once per catalogue load. Filtering only rewrites the `visible` flags.

use std::sync::Arc;

use tracing::debug;

use papers_model::{Catalogue, Grade, Paper, Subject};

use crate::error::{ConfigError, Result};
use crate::filter::{FilterCriteria, matches};

/// One paper row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperEntry {
    paper: usize,
    visible: bool,
}

/// One subject inside a grade section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectGroup {
    subject: usize,
    visible: bool,
    expanded: bool,
    papers: Vec<PaperEntry>,
}

/// One grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeSection {
    grade: usize,
    visible: bool,
    expanded: bool,
    subjects: Vec<SubjectGroup>,
}

/// Visible node counts after a filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub visible_papers: usize,
    pub visible_subjects: usize,
    pub visible_grades: usize,
    pub total_papers: usize,
}

impl FilterSummary {
    pub fn is_empty(&self) -> bool {
        self.visible_papers == 0
    }
}

/// The hierarchical view model for one catalogue load.
#[derive(Debug, Clone)]
pub struct RenderTree {
    catalogue: Arc<Catalogue>,
    sections: Vec<GradeSection>,
}

impl RenderTree {
    /// Build one node per grade, subject and paper, in catalogue order.
    ///
    /// Every node starts expanded. Visibility comes from an unfiltered pass,
    /// so groups without papers start hidden.
    pub fn build(catalogue: Arc<Catalogue>) -> Self {
        let sections = catalogue
            .grades()
            .iter()
            .enumerate()
            .map(|(grade, g)| GradeSection {
                grade,
                visible: true,
                expanded: true,
                subjects: g
                    .subjects()
                    .iter()
                    .enumerate()
                    .map(|(subject, s)| SubjectGroup {
                        subject,
                        visible: true,
                        expanded: true,
                        papers: (0..s.papers().len())
                            .map(|paper| PaperEntry {
                                paper,
                                visible: true,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        let mut tree = Self {
            catalogue,
            sections,
        };
        tree.apply_filter(&FilterCriteria::default());
        tree
    }

    pub fn catalogue(&self) -> &Arc<Catalogue> {
        &self.catalogue
    }

    /// Recompute every visibility flag from scratch.
    ///
    /// A paper is visible iff it [`matches`]; a subject iff any of its papers
    /// is; a grade iff any of its subjects is. Expansion state is untouched.
    pub fn apply_filter(&mut self, criteria: &FilterCriteria) -> FilterSummary {
        let mut summary = FilterSummary::default();
        let grades = self.catalogue.grades();
        for section in &mut self.sections {
            let grade = &grades[section.grade];
            let mut grade_visible = false;
            for group in &mut section.subjects {
                let subject = &grade.subjects()[group.subject];
                let mut subject_visible = false;
                for entry in &mut group.papers {
                    let paper = &subject.papers()[entry.paper];
                    entry.visible = matches(criteria, grade.name(), subject.name(), paper);
                    summary.total_papers += 1;
                    if entry.visible {
                        summary.visible_papers += 1;
                        subject_visible = true;
                    }
                }
                group.visible = subject_visible;
                if subject_visible {
                    summary.visible_subjects += 1;
                    grade_visible = true;
                }
            }
            section.visible = grade_visible;
            if grade_visible {
                summary.visible_grades += 1;
            }
        }
        debug!(
            visible_papers = summary.visible_papers,
            visible_subjects = summary.visible_subjects,
            visible_grades = summary.visible_grades,
            total_papers = summary.total_papers,
            "filter applied"
        );
        summary
    }

    /// All grade sections, visible or not.
    pub fn grades(&self) -> impl Iterator<Item = GradeView<'_>> {
        let grades = self.catalogue.grades();
        self.sections.iter().map(move |node| GradeView {
            grade: &grades[node.grade],
            node,
        })
    }

    /// Only the grade sections that survived the last filter pass.
    pub fn visible_grades(&self) -> impl Iterator<Item = GradeView<'_>> {
        self.grades().filter(GradeView::is_visible)
    }

    pub fn grade(&self, index: usize) -> Option<GradeView<'_>> {
        let node = self.sections.get(index)?;
        Some(GradeView {
            grade: &self.catalogue.grades()[node.grade],
            node,
        })
    }

    /// Section index for a grade name.
    pub fn grade_index(&self, name: &str) -> Option<usize> {
        self.grades().position(|view| view.name() == name)
    }

    /// Every paper entry with its ancestry, in tree order.
    pub fn papers(&self) -> impl Iterator<Item = PaperView<'_>> {
        self.grades()
            .flat_map(|grade| grade.subjects())
            .flat_map(|subject| subject.papers())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn section_mut(&mut self, grade: usize) -> Result<&mut GradeSection> {
        self.sections
            .get_mut(grade)
            .ok_or(ConfigError::UnknownGrade { grade })
    }

    fn group_mut(&mut self, grade: usize, subject: usize) -> Result<&mut SubjectGroup> {
        self.section_mut(grade)?
            .subjects
            .get_mut(subject)
            .ok_or(ConfigError::UnknownSubject { grade, subject })
    }

    /// Flip a grade section open or closed; returns the new state.
    pub fn toggle_grade(&mut self, grade: usize) -> Result<bool> {
        let section = self.section_mut(grade)?;
        section.expanded = !section.expanded;
        Ok(section.expanded)
    }

    pub fn set_grade_expanded(&mut self, grade: usize, expanded: bool) -> Result<()> {
        self.section_mut(grade)?.expanded = expanded;
        Ok(())
    }

    /// Flip a subject group open or closed; returns the new state.
    pub fn toggle_subject(&mut self, grade: usize, subject: usize) -> Result<bool> {
        let group = self.group_mut(grade, subject)?;
        group.expanded = !group.expanded;
        Ok(group.expanded)
    }

    pub fn set_subject_expanded(
        &mut self,
        grade: usize,
        subject: usize,
        expanded: bool,
    ) -> Result<()> {
        self.group_mut(grade, subject)?.expanded = expanded;
        Ok(())
    }

    /// Open or close every section and group at once.
    pub fn set_all_expanded(&mut self, expanded: bool) {
        for section in &mut self.sections {
            section.expanded = expanded;
            for group in &mut section.subjects {
                group.expanded = expanded;
            }
        }
    }
}

/// A grade section joined with its grade.
#[derive(Debug, Clone, Copy)]
pub struct GradeView<'a> {
    pub grade: &'a Grade,
    node: &'a GradeSection,
}

impl<'a> GradeView<'a> {
    pub fn name(&self) -> &'a str {
        self.grade.name()
    }

    pub fn is_visible(&self) -> bool {
        self.node.visible
    }

    pub fn is_expanded(&self) -> bool {
        self.node.expanded
    }

    pub fn subjects(&self) -> impl Iterator<Item = SubjectView<'a>> + use<'a> {
        let (grade, section) = (self.grade, self.node);
        section.subjects.iter().map(move |node| SubjectView {
            grade,
            subject: &grade.subjects()[node.subject],
            node,
        })
    }

    pub fn visible_subjects(&self) -> impl Iterator<Item = SubjectView<'a>> + use<'a> {
        self.subjects().filter(SubjectView::is_visible)
    }
}

/// A subject group joined with its grade and subject.
#[derive(Debug, Clone, Copy)]
pub struct SubjectView<'a> {
    pub grade: &'a Grade,
    pub subject: &'a Subject,
    node: &'a SubjectGroup,
}

impl<'a> SubjectView<'a> {
    pub fn name(&self) -> &'a str {
        self.subject.name()
    }

    pub fn is_visible(&self) -> bool {
        self.node.visible
    }

    pub fn is_expanded(&self) -> bool {
        self.node.expanded
    }

    /// Papers in the group regardless of filtering.
    pub fn paper_count(&self) -> usize {
        self.node.papers.len()
    }

    pub fn visible_paper_count(&self) -> usize {
        self.node.papers.iter().filter(|entry| entry.visible).count()
    }

    pub fn papers(&self) -> impl Iterator<Item = PaperView<'a>> + use<'a> {
        let (grade, subject, group) = (self.grade, self.subject, self.node);
        group.papers.iter().map(move |node| PaperView {
            grade,
            subject,
            paper: &subject.papers()[node.paper],
            node,
        })
    }

    pub fn visible_papers(&self) -> impl Iterator<Item = PaperView<'a>> + use<'a> {
        self.papers().filter(PaperView::is_visible)
    }
}

/// A paper entry joined with its record and ancestry.
#[derive(Debug, Clone, Copy)]
pub struct PaperView<'a> {
    pub grade: &'a Grade,
    pub subject: &'a Subject,
    pub paper: &'a Paper,
    node: &'a PaperEntry,
}

impl PaperView<'_> {
    pub fn is_visible(&self) -> bool {
        self.node.visible
    }
}
