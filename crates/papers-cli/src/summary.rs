use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use papers_core::CatalogueStore;

use crate::render::{align_column, apply_table_style, dim_cell, header_cell};

/// Totals, then per-grade counts.
pub fn stats_table(store: &CatalogueStore) -> Table {
    let stats = store.stats();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Grade"),
        header_cell("Subjects"),
        header_cell("Papers"),
        header_cell("With memo"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for grade in store.catalogue().grades() {
        let with_memo = grade
            .subjects()
            .iter()
            .flat_map(|subject| subject.papers())
            .filter(|paper| paper.has_memo())
            .count();
        table.add_row(vec![
            Cell::new(grade.name()).fg(Color::Blue),
            Cell::new(grade.subjects().len()),
            Cell::new(grade.paper_count()),
            count_cell(with_memo),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.total_subjects).add_attribute(Attribute::Bold),
        Cell::new(stats.total_papers).add_attribute(Attribute::Bold),
        Cell::new(stats.papers_with_memo).add_attribute(Attribute::Bold),
    ]);
    table
}

/// The lines printed under the stats table.
pub fn stats_details(store: &CatalogueStore) -> Vec<String> {
    let years: Vec<String> = store.years().iter().map(u16::to_string).collect();
    let mut lines = vec![
        format!("Source: {}", store.location().unwrap_or("-")),
        format!("Fingerprint: {}", store.fingerprint().unwrap_or("-")),
        format!("Subjects: {}", list_or_dash(store.subjects())),
        format!("Years: {}", list_or_dash(&years)),
    ];
    let latest = store.stats().latest_year;
    if latest > 0 {
        lines.push(format!("Latest year: {latest}"));
    }
    lines
}

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}
