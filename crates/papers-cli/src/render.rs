//! Terminal presentation of the render tree.
//!
//! Grid and list modes render visible papers as tables; card and compact
//! modes render an indented outline. In every mode hidden nodes are skipped
//! and a collapsed section or group shows only its heading.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use papers_core::{FilterSummary, PaperView, RenderTree, SubjectView, ViewMode, entry_text};

/// Shown in place of the listing when nothing is visible.
pub const NO_MATCHES: &str = "No papers match the current filters.";

const EXPANDED_MARKER: &str = "▾";
const COLLAPSED_MARKER: &str = "▸";

pub fn render_tree(tree: &RenderTree, mode: ViewMode) -> String {
    if tree.visible_grades().next().is_none() {
        return NO_MATCHES.to_string();
    }
    match mode {
        ViewMode::Grid => grid_table(tree).to_string(),
        ViewMode::List => list_table(tree).to_string(),
        ViewMode::Card => card_outline(tree),
        ViewMode::Compact => compact_outline(tree),
    }
}

/// `Showing 1 of 2 papers (1 subject, 1 grade)`.
pub fn summary_line(summary: &FilterSummary) -> String {
    format!(
        "Showing {} of {} papers ({} {}, {} {})",
        summary.visible_papers,
        summary.total_papers,
        summary.visible_subjects,
        plural(summary.visible_subjects, "subject", "subjects"),
        summary.visible_grades,
        plural(summary.visible_grades, "grade", "grades"),
    )
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// One row per visible paper, grouped under grade and subject cells that are
/// only filled on the first row of their group.
fn grid_table(tree: &RenderTree) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Grade"),
        header_cell("Subject"),
        header_cell("Year"),
        header_cell("Type"),
        header_cell("Paper"),
        header_cell("Memo"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for grade in tree.visible_grades() {
        if !grade.is_expanded() {
            table.add_row(vec![
                grade_cell(grade.name(), false),
                dim_cell(hidden_count(
                    grade
                        .visible_subjects()
                        .map(|subject| subject.visible_paper_count())
                        .sum(),
                )),
            ]);
            continue;
        }
        let mut grade_label = Some(grade.name());
        for subject in grade.visible_subjects() {
            let first_cell = grade_label
                .take()
                .map_or_else(|| Cell::new(""), |name| grade_cell(name, true));
            if !subject.is_expanded() {
                table.add_row(vec![
                    first_cell,
                    subject_cell(subject.name(), false),
                    dim_cell(hidden_count(subject.visible_paper_count())),
                ]);
                continue;
            }
            let mut first = Some(first_cell);
            let mut subject_label = Some(subject.name());
            for paper in subject.visible_papers() {
                let record = paper.paper;
                table.add_row(vec![
                    first.take().unwrap_or_else(|| Cell::new("")),
                    subject_label
                        .take()
                        .map_or_else(|| Cell::new(""), |name| subject_cell(name, true)),
                    Cell::new(record.year),
                    optional_cell(record.paper_type.as_deref()),
                    Cell::new(&record.paper),
                    optional_cell(record.memo.as_deref()),
                ]);
            }
        }
    }
    table
}

/// The legacy flat list: one row per visible paper with its entry text.
/// Expansion state does not apply to a flat list.
fn list_table(tree: &RenderTree) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Grade"),
        header_cell("Entry"),
        header_cell("Links"),
    ]);
    apply_table_style(&mut table);
    for paper in tree.papers().filter(PaperView::is_visible) {
        table.add_row(vec![
            Cell::new(paper.grade.name()),
            Cell::new(entry_text(paper.subject.name(), paper.paper)),
            Cell::new(links(&paper)),
        ]);
    }
    table
}

/// Grade headings, subject headings, then one block per paper.
fn card_outline(tree: &RenderTree) -> String {
    outline(tree, |subject, paper| {
        let record = paper.paper;
        let mut block = vec![
            format!("    [{}]", entry_text(subject.name(), record)),
            format!("      paper: {}", record.paper),
        ];
        if let Some(memo) = &record.memo {
            block.push(format!("      memo:  {memo}"));
        }
        block
    })
}

/// One line per paper.
fn compact_outline(tree: &RenderTree) -> String {
    outline(tree, |_, paper| {
        vec![format!("    {}  {}", paper.paper.year_label(), links(paper))]
    })
}

/// Headings for every visible node, with `paper_lines` below each visible
/// paper of an expanded group.
fn outline(
    tree: &RenderTree,
    paper_lines: impl Fn(&SubjectView<'_>, &PaperView<'_>) -> Vec<String>,
) -> String {
    let mut lines = Vec::new();
    for grade in tree.visible_grades() {
        lines.push(format!("{} {}", marker(grade.is_expanded()), grade.name()));
        if !grade.is_expanded() {
            continue;
        }
        for subject in grade.visible_subjects() {
            lines.push(format!("  {}", subject_heading(&subject)));
            if !subject.is_expanded() {
                continue;
            }
            for paper in subject.visible_papers() {
                lines.extend(paper_lines(&subject, &paper));
            }
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn subject_heading(subject: &SubjectView<'_>) -> String {
    format!(
        "{} {} ({}/{})",
        marker(subject.is_expanded()),
        subject.name(),
        subject.visible_paper_count(),
        subject.paper_count()
    )
}

fn links(paper: &PaperView<'_>) -> String {
    let record = paper.paper;
    let text = match &record.paper_type {
        Some(paper_type) => format!("{paper_type}: {}", record.paper),
        None => record.paper.clone(),
    };
    match &record.memo {
        Some(memo) => format!("{text} | memo: {memo}"),
        None => text,
    }
}

fn marker(expanded: bool) -> &'static str {
    if expanded {
        EXPANDED_MARKER
    } else {
        COLLAPSED_MARKER
    }
}

fn hidden_count(papers: usize) -> String {
    format!("{} {} collapsed", papers, plural(papers, "paper", "papers"))
}

pub(crate) fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub(crate) fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub(crate) fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub(crate) fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn grade_cell(name: &str, expanded: bool) -> Cell {
    Cell::new(format!("{} {name}", marker(expanded)))
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn subject_cell(name: &str, expanded: bool) -> Cell {
    Cell::new(format!("{} {name}", marker(expanded)))
}

fn optional_cell(value: Option<&str>) -> Cell {
    value.map_or_else(|| dim_cell("-"), Cell::new)
}
