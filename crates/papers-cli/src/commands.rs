use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use papers_cli::config::HubConfig;
use papers_cli::render::{render_tree, summary_line};
use papers_cli::summary::{stats_details, stats_table};
use papers_core::{FilterField, PapersHub};
use papers_ingest::source_from_location;

use crate::cli::{BrowseArgs, SourceArgs, SuggestArgs};

pub fn run_browse(args: &BrowseArgs, config: &HubConfig) -> Result<()> {
    let view = config.resolve_view(args.view.as_deref())?;
    let mut hub = load_hub(args.source.source.as_deref(), config, config.suggestion_limit)?
        .with_view_mode(view);
    let span = info_span!("browse", view = %view);
    let _guard = span.enter();

    if let Some(token) = &args.quick {
        hub.quick_filter(token)?;
    }
    let fields = [
        (FilterField::Grade, &args.grade),
        (FilterField::Subject, &args.subject),
        (FilterField::Year, &args.year),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            hub.set_filter(field, value);
        }
    }
    if let Some(text) = &args.search {
        let suggestions = hub.search_input(text);
        debug!(suggestions = suggestions.len(), "search applied");
    }

    if args.collapse_all {
        hub.set_all_expanded(false);
    }
    for name in &args.collapse {
        let Some(index) = hub.tree().grade_index(name) else {
            bail!("unknown grade '{name}'");
        };
        hub.set_grade_expanded(index, false)?;
    }

    let rendered = render_tree(hub.tree(), hub.view_mode());
    println!("{}", rendered.trim_end());
    println!();
    println!("{}", summary_line(&hub.summary()));
    Ok(())
}

pub fn run_suggest(args: &SuggestArgs, config: &HubConfig) -> Result<()> {
    let limit = config.resolve_limit(args.limit);
    let mut hub = load_hub(Some(&args.source), config, limit)?;
    for suggestion in hub.search_input(&args.text) {
        println!("{suggestion}");
    }
    Ok(())
}

pub fn run_stats(args: &SourceArgs, config: &HubConfig) -> Result<()> {
    let hub = load_hub(args.source.as_deref(), config, config.suggestion_limit)?;
    println!("{}", stats_table(hub.store()));
    for line in stats_details(hub.store()) {
        println!("{line}");
    }
    Ok(())
}

pub fn run_check(args: &SourceArgs, config: &HubConfig) -> Result<()> {
    let hub = load_hub(args.source.as_deref(), config, config.suggestion_limit)?;
    let stats = hub.store().stats();
    println!(
        "ok: {} papers, {} subjects, {} grades ({})",
        stats.total_papers,
        stats.total_subjects,
        stats.total_grades,
        hub.store().location().unwrap_or("-"),
    );
    Ok(())
}

fn load_hub(source: Option<&str>, config: &HubConfig, limit: usize) -> Result<PapersHub> {
    let location = config.resolve_source(source)?;
    let source = source_from_location(&location, config.request_timeout)?;
    let mut hub = PapersHub::new().with_suggestion_limit(limit);
    hub.load(source.as_ref())
        .with_context(|| format!("load catalogue from {location}"))?;
    Ok(hub)
}
