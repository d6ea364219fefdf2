//! Tests for render tree construction, filtering and expansion.

use std::sync::Arc;

use papers_core::{ConfigError, FilterCriteria, FilterField, RenderTree};
use papers_ingest::parse_catalogue;

const SCENARIO: &str = r#"{
  "Grade 10": {
    "Math": [
      { "year": 2020, "paper": "a.pdf" },
      { "year": 2021, "paper": "b.pdf", "memo": "b-memo.pdf" }
    ]
  }
}"#;

const WIDE: &str = r#"{
  "Grade 12": {
    "Physics": [{ "year": 2019, "paper": "p19.pdf" }],
    "Accounting": [
      { "year": 2022, "paper": "acc22.pdf", "paper_type": "Paper 1" },
      { "year": 2022, "paper": "acc22b.pdf", "paper_type": "Paper 2" }
    ]
  },
  "Grade 10": {
    "Math": [{ "year": 2021, "paper": "m21.pdf" }],
    "History": []
  }
}"#;

fn tree(document: &str) -> RenderTree {
    RenderTree::build(Arc::new(parse_catalogue(document.as_bytes()).unwrap()))
}

fn visibility(tree: &RenderTree) -> Vec<bool> {
    tree.papers().map(|entry| entry.is_visible()).collect()
}

#[test]
fn year_filter_hides_other_entries() {
    let mut tree = tree(SCENARIO);
    let mut criteria = FilterCriteria::new();
    criteria.set(FilterField::Year, "2021");

    let summary = tree.apply_filter(&criteria);

    assert_eq!(visibility(&tree), vec![false, true]);
    let grade = tree.grade(0).unwrap();
    assert!(grade.is_visible());
    let math = grade.subjects().next().unwrap();
    assert_eq!(math.name(), "Math");
    assert!(math.is_visible());
    assert_eq!(math.visible_paper_count(), 1);
    assert_eq!(summary.visible_papers, 1);
    assert_eq!(summary.visible_subjects, 1);
    assert_eq!(summary.visible_grades, 1);
    assert_eq!(summary.total_papers, 2);
}

#[test]
fn quick_filter_all_shows_everything() {
    let mut tree = tree(SCENARIO);
    let mut criteria = FilterCriteria::new();
    criteria.set(FilterField::Year, "2021");
    tree.apply_filter(&criteria);

    criteria.apply_quick_filter("all").unwrap();
    let summary = tree.apply_filter(&criteria);

    assert_eq!(visibility(&tree), vec![true, true]);
    assert_eq!(summary.visible_papers, summary.total_papers);
}

#[test]
fn quick_filter_grade_token_matches_label() {
    let mut tree = tree(WIDE);
    let mut criteria = FilterCriteria::new();
    criteria.apply_quick_filter("grade-10").unwrap();
    tree.apply_filter(&criteria);

    let visible: Vec<&str> = tree.visible_grades().map(|g| g.name()).collect();
    assert_eq!(visible, vec!["Grade 10"]);
}

#[test]
fn nodes_follow_catalogue_order() {
    let tree = tree(WIDE);
    let outline: Vec<(&str, Vec<&str>)> = tree
        .grades()
        .map(|g| (g.name(), g.subjects().map(|s| s.name()).collect()))
        .collect();
    assert_eq!(
        outline,
        vec![
            ("Grade 12", vec!["Physics", "Accounting"]),
            ("Grade 10", vec!["Math", "History"]),
        ]
    );
    let urls: Vec<&str> = tree.papers().map(|p| p.paper.paper.as_str()).collect();
    assert_eq!(urls, vec!["p19.pdf", "acc22.pdf", "acc22b.pdf", "m21.pdf"]);
}

#[test]
fn subject_without_papers_is_hidden_by_any_filter_pass() {
    let mut tree = tree(WIDE);
    let summary = tree.apply_filter(&FilterCriteria::default());
    let grade_10 = tree.grade(1).unwrap();
    let history = grade_10.subjects().nth(1).unwrap();
    assert_eq!(history.name(), "History");
    assert!(!history.is_visible());
    assert_eq!(summary.visible_subjects, 3);
    assert_eq!(summary.visible_grades, 2);
}

#[test]
fn fresh_tree_matches_an_unfiltered_pass() {
    let fresh = tree(WIDE);
    let history = fresh.grade(1).unwrap().subjects().nth(1).unwrap();
    assert_eq!(history.name(), "History");
    assert!(!history.is_visible());

    let mut recomputed = fresh.clone();
    recomputed.apply_filter(&FilterCriteria::default());
    let flags = |tree: &RenderTree| -> Vec<bool> {
        tree.grades()
            .flat_map(|g| {
                std::iter::once(g.is_visible()).chain(g.subjects().map(|s| s.is_visible()))
            })
            .collect()
    };
    assert_eq!(flags(&fresh), flags(&recomputed));
    assert_eq!(visibility(&fresh), visibility(&recomputed));
}

#[test]
fn grade_without_subjects_starts_hidden() {
    let fresh = tree(r#"{ "Grade 11": {}, "Grade 12": { "Physics": [{ "year": 2019, "paper": "p.pdf" }] } }"#);
    let visible: Vec<&str> = fresh.visible_grades().map(|g| g.name()).collect();
    assert_eq!(visible, vec!["Grade 12"]);
}

#[test]
fn parent_visible_iff_some_child_visible() {
    let mut tree = tree(WIDE);
    let criteria = FilterCriteria {
        search: "paper 2".to_string(),
        ..FilterCriteria::default()
    };
    tree.apply_filter(&criteria);

    for grade in tree.grades() {
        let any_subject = grade.subjects().any(|s| s.is_visible());
        assert_eq!(grade.is_visible(), any_subject, "{}", grade.name());
        for subject in grade.subjects() {
            let any_paper = subject.papers().any(|p| p.is_visible());
            assert_eq!(subject.is_visible(), any_paper, "{}", subject.name());
        }
    }
    let visible: Vec<&str> = tree
        .papers()
        .filter(|p| p.is_visible())
        .map(|p| p.paper.paper.as_str())
        .collect();
    assert_eq!(visible, vec!["acc22b.pdf"]);
}

#[test]
fn toggles_are_independent_of_visibility() {
    let mut tree = tree(WIDE);
    assert!(tree.grade(0).unwrap().is_expanded());

    assert!(!tree.toggle_grade(0).unwrap());
    assert!(!tree.toggle_subject(1, 0).unwrap());

    let criteria = FilterCriteria {
        year: "2019".to_string(),
        ..FilterCriteria::default()
    };
    tree.apply_filter(&criteria);
    assert!(!tree.grade(0).unwrap().is_expanded());
    assert!(tree.grade(0).unwrap().is_visible());

    let grade_10 = tree.grade(1).unwrap();
    assert!(!grade_10.is_visible());
    assert!(grade_10.is_expanded());
    assert!(!grade_10.subjects().next().unwrap().is_expanded());

    assert!(tree.toggle_grade(0).unwrap());
}

#[test]
fn set_all_expanded_reaches_every_node() {
    let mut tree = tree(WIDE);
    tree.set_all_expanded(false);
    assert!(tree.grades().all(|g| !g.is_expanded()));
    assert!(
        tree.grades()
            .flat_map(|g| g.subjects())
            .all(|s| !s.is_expanded())
    );

    tree.set_subject_expanded(0, 1, true).unwrap();
    tree.set_grade_expanded(0, true).unwrap();
    let grade = tree.grade(0).unwrap();
    assert!(grade.is_expanded());
    assert!(grade.subjects().nth(1).unwrap().is_expanded());
}

#[test]
fn toggling_unknown_nodes_fails() {
    let mut tree = tree(SCENARIO);
    assert_eq!(
        tree.toggle_grade(3),
        Err(ConfigError::UnknownGrade { grade: 3 })
    );
    assert_eq!(
        tree.toggle_subject(0, 7),
        Err(ConfigError::UnknownSubject {
            grade: 0,
            subject: 7
        })
    );
}

#[test]
fn grade_index_finds_sections_by_name() {
    let tree = tree(WIDE);
    assert_eq!(tree.grade_index("Grade 10"), Some(1));
    assert_eq!(tree.grade_index("Grade 11"), None);
    assert_eq!(tree.len(), 2);
}
