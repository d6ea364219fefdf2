//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "papers-hub",
    version,
    about = "Browse, search and filter an examination paper catalogue",
    long_about = "Browse, search and filter an examination paper catalogue.\n\n\
                  SOURCE is a path to a JSON document or an http(s) URL. It may\n\
                  be omitted when the config file names a default source."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML settings file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the catalogue, filtered, in a view mode.
    Browse(BrowseArgs),

    /// Print search suggestions for a piece of text.
    Suggest(SuggestArgs),

    /// Print catalogue statistics.
    Stats(SourceArgs),

    /// Validate a catalogue document.
    Check(SourceArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Catalogue path or URL.
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,
}

#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Quick filter token applied first: `all` or a grade such as `grade-10`.
    #[arg(long = "quick", value_name = "TOKEN")]
    pub quick: Option<String>,

    /// Grade name substring.
    #[arg(long = "grade")]
    pub grade: Option<String>,

    /// Subject name substring.
    #[arg(long = "subject")]
    pub subject: Option<String>,

    /// Exact year.
    #[arg(long = "year")]
    pub year: Option<String>,

    /// Free-text search.
    #[arg(long = "search")]
    pub search: Option<String>,

    /// Layout: grid, card, compact or list (default from config, else grid).
    #[arg(long = "view", value_name = "MODE")]
    pub view: Option<String>,

    /// Collapse a grade section by name. Repeatable.
    #[arg(long = "collapse", value_name = "GRADE")]
    pub collapse: Vec<String>,

    /// Start with every section and group collapsed.
    #[arg(long = "collapse-all")]
    pub collapse_all: bool,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Catalogue path or URL. Required here since TEXT follows it.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Text typed into the search box.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Maximum number of suggestions (default from config, else 5).
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
