//! Property tests for filtering and suggestions over generated catalogues.

use std::sync::Arc;

use proptest::prelude::*;

use papers_core::{FilterCriteria, RenderTree, SuggestionCorpus, matches};
use papers_model::{Catalogue, Grade, Paper, Subject};

const SUBJECT_NAMES: [&str; 5] = ["Math", "Mathematics", "History", "Physics", "Life Sciences"];

fn paper_strategy() -> impl Strategy<Value = Paper> {
    (2015i64..2025, any::<bool>(), prop::option::of("Paper [12]")).prop_map(
        |(year, memo, paper_type)| {
            Paper::new(year, format!("{year}.pdf"))
                .unwrap()
                .with_memo(memo.then(|| format!("{year}-memo.pdf")))
                .with_paper_type(paper_type)
        },
    )
}

fn catalogue_strategy() -> impl Strategy<Value = Catalogue> {
    let subjects = prop::sample::subsequence(SUBJECT_NAMES.to_vec(), 0..=SUBJECT_NAMES.len())
        .prop_flat_map(|names| {
            let count = names.len();
            (
                Just(names),
                prop::collection::vec(prop::collection::vec(paper_strategy(), 0..4), count),
            )
        })
        .prop_map(|(names, papers)| {
            names
                .into_iter()
                .zip(papers)
                .map(|(name, papers)| Subject::new(name, papers))
                .collect::<Vec<_>>()
        });
    prop::collection::vec(subjects, 0..4).prop_map(|grades| {
        let grades = grades
            .into_iter()
            .enumerate()
            .map(|(i, subjects)| Grade::new(format!("Grade {}", 9 + i), subjects))
            .collect();
        Catalogue::new(grades).unwrap()
    })
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    let grade = prop_oneof![Just(String::new()), Just("grade 1".to_string()), "grade (9|10|11)"];
    let subject = prop_oneof![Just(String::new()), "(math|his|SCI)"];
    let year = prop_oneof![Just(String::new()), (2015u16..2025).prop_map(|y| y.to_string())];
    let search = prop_oneof![Just(String::new()), "(memo|paper 2|20(19|20)|grade)"];
    (grade, subject, year, search).prop_map(|(grade, subject, year, search)| FilterCriteria {
        grade,
        subject,
        year,
        search,
    })
}

proptest! {
    #[test]
    fn empty_criteria_show_every_paper(catalogue in catalogue_strategy()) {
        let mut tree = RenderTree::build(Arc::new(catalogue));
        let summary = tree.apply_filter(&FilterCriteria::default());
        prop_assert_eq!(summary.visible_papers, summary.total_papers);
        prop_assert!(tree.papers().all(|p| p.is_visible()));
    }

    #[test]
    fn visibility_equals_predicate(
        catalogue in catalogue_strategy(),
        criteria in criteria_strategy(),
    ) {
        let mut tree = RenderTree::build(Arc::new(catalogue));
        tree.apply_filter(&criteria);
        for entry in tree.papers() {
            let expected = matches(&criteria, entry.grade.name(), entry.subject.name(), entry.paper);
            prop_assert_eq!(entry.is_visible(), expected);
        }
        for grade in tree.grades() {
            prop_assert_eq!(grade.is_visible(), grade.subjects().any(|s| s.is_visible()));
            for subject in grade.subjects() {
                prop_assert_eq!(subject.is_visible(), subject.papers().any(|p| p.is_visible()));
            }
        }
    }

    #[test]
    fn filtering_is_idempotent(
        catalogue in catalogue_strategy(),
        first in criteria_strategy(),
        second in criteria_strategy(),
    ) {
        let mut tree = RenderTree::build(Arc::new(catalogue));
        tree.apply_filter(&first);
        let once = tree.apply_filter(&second);
        let flags: Vec<bool> = tree.papers().map(|p| p.is_visible()).collect();
        let twice = tree.apply_filter(&second);
        let again: Vec<bool> = tree.papers().map(|p| p.is_visible()).collect();
        prop_assert_eq!(once, twice);
        prop_assert_eq!(flags, again);
    }

    #[test]
    fn clear_always_yields_default(mut criteria in criteria_strategy()) {
        criteria.clear();
        prop_assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn suggestions_are_bounded_matching_and_unique(
        catalogue in catalogue_strategy(),
        text in "(a|ma|GRADE|20|sci)",
        limit in 0usize..8,
    ) {
        let corpus = SuggestionCorpus::build(&catalogue);
        let results = corpus.query(&text, limit);
        prop_assert!(results.len() <= limit);
        let needle = text.to_lowercase();
        for result in &results {
            prop_assert!(result.to_lowercase().contains(&needle));
        }
        let mut deduped = results.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), results.len());
    }
}
