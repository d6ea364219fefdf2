//! Tests for the browsing session context.

use papers_core::{ConfigError, FilterField, PapersHub, ViewMode};
use papers_ingest::StaticSource;

const SCENARIO: &str = r#"{
  "Grade 10": {
    "Math": [
      { "year": 2020, "paper": "a.pdf" },
      { "year": 2021, "paper": "b.pdf", "memo": "b-memo.pdf" }
    ],
    "History": [{ "year": 2021, "paper": "h.pdf" }]
  },
  "Grade 12": {
    "Mathematics": [{ "year": 2019, "paper": "m.pdf" }]
  }
}"#;

fn loaded_hub() -> PapersHub {
    let mut hub = PapersHub::new();
    hub.load(&StaticSource::json(SCENARIO)).unwrap();
    hub
}

#[test]
fn load_shows_everything() {
    let hub = loaded_hub();
    let summary = hub.summary();
    assert_eq!(summary.visible_papers, 4);
    assert_eq!(summary.total_papers, 4);
    assert_eq!(summary.visible_grades, 2);
}

#[test]
fn search_input_filters_and_suggests() {
    let mut hub = loaded_hub();
    let suggestions = hub.search_input("Math");
    assert_eq!(
        suggestions,
        vec![
            "Math",
            "Grade 10 Math",
            "Math 2020",
            "Grade 10 Math 2020",
            "Math 2021"
        ]
    );
    assert_eq!(hub.criteria().search, "math");
    assert_eq!(hub.summary().visible_papers, 3);
}

#[test]
fn suggestion_limit_is_configurable() {
    let mut hub = loaded_hub().with_suggestion_limit(2);
    assert_eq!(hub.search_input("grade").len(), 2);
    assert!(hub.search_input("").is_empty());
    assert_eq!(hub.summary().visible_papers, 4);
}

#[test]
fn selecting_a_grade_suggestion_filters_to_it() {
    let mut hub = loaded_hub();
    hub.select_suggestion("Grade 12");
    assert_eq!(hub.criteria().search, "grade 12");
    let visible: Vec<&str> = hub.tree().visible_grades().map(|g| g.name()).collect();
    assert_eq!(visible, vec!["Grade 12"]);
}

#[test]
fn discrete_filters_combine() {
    let mut hub = loaded_hub();
    hub.set_filter(FilterField::Year, "2021");
    assert_eq!(hub.summary().visible_papers, 2);
    hub.set_filter_by_name("subject", "hist").unwrap();
    assert_eq!(hub.summary().visible_papers, 1);

    let error = hub.set_filter_by_name("colour", "red").unwrap_err();
    assert!(matches!(error, ConfigError::UnknownFilterField { .. }));
    assert_eq!(hub.summary().visible_papers, 1);
}

#[test]
fn quick_filter_and_clear() {
    let mut hub = loaded_hub();
    hub.set_filter(FilterField::Year, "2019");
    hub.quick_filter("grade-10").unwrap();
    assert_eq!(hub.criteria().year, "");
    assert_eq!(hub.summary().visible_papers, 3);

    assert!(hub.quick_filter("").is_err());
    assert_eq!(hub.criteria().grade, "grade 10");

    hub.clear_filters();
    assert!(hub.criteria().is_empty());
    assert_eq!(hub.summary().visible_papers, 4);
}

#[test]
fn criteria_survive_reload() {
    let mut hub = loaded_hub();
    hub.set_filter(FilterField::Grade, "grade 12");
    hub.load(&StaticSource::json(SCENARIO)).unwrap();
    assert_eq!(hub.criteria().grade, "grade 12");
    assert_eq!(hub.summary().visible_papers, 1);
}

#[test]
fn failed_load_keeps_tree() {
    let mut hub = loaded_hub();
    hub.toggle_grade(0).unwrap();
    assert!(hub.load(&StaticSource::json("[]")).is_err());
    assert_eq!(hub.tree().len(), 2);
    assert!(!hub.tree().grade(0).unwrap().is_expanded());
}

#[test]
fn view_mode_changes_leave_filtering_alone() {
    let mut hub = loaded_hub();
    hub.set_filter(FilterField::Year, "2021");
    let before = hub.summary();

    assert_eq!(hub.view_mode(), ViewMode::Grid);
    assert_eq!(hub.set_view_mode("Compact").unwrap(), ViewMode::Compact);
    assert!(hub.set_view_mode("table").is_err());
    assert_eq!(hub.view_mode(), ViewMode::Compact);
    assert_eq!(hub.handle_shortcut('2'), Some(ViewMode::Card));
    assert_eq!(hub.handle_shortcut('x'), None);
    assert_eq!(hub.view_mode(), ViewMode::Card);

    assert_eq!(hub.summary(), before);
}

#[test]
fn builder_sets_initial_view() {
    let hub = PapersHub::new().with_view_mode(ViewMode::List);
    assert_eq!(hub.view_mode(), ViewMode::List);
    assert!(hub.tree().is_empty());
}

#[test]
fn expansion_changes_leave_filtering_alone() {
    let mut hub = loaded_hub();
    hub.set_filter(FilterField::Year, "2021");
    let before = hub.summary();
    let visible_before: Vec<bool> = hub.tree().papers().map(|p| p.is_visible()).collect();

    assert!(!hub.toggle_grade(0).unwrap());
    assert!(!hub.toggle_subject(0, 1).unwrap());
    hub.set_subject_expanded(1, 0, false).unwrap();
    hub.set_grade_expanded(1, false).unwrap();
    hub.set_all_expanded(true);
    assert!(hub.toggle_grade(5).is_err());

    assert_eq!(hub.summary(), before);
    assert_eq!(hub.criteria().year, "2021");
    let visible_after: Vec<bool> = hub.tree().papers().map(|p| p.is_visible()).collect();
    assert_eq!(visible_after, visible_before);
    assert!(hub.tree().grades().all(|g| g.is_expanded()));
}
