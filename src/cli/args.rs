/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// contactcli — fuzzy search a local contact directory from the CLI.
#[derive(Debug, Parser)]
#[command(
    name = "contactcli",
    about = "Fuzzy search a local contact directory from the CLI, as you type",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Comma-separated field names to include in output (projection).
    /// Available fields vary by command (see --help for each subcommand).
    #[arg(long, global = true, value_name = "FIELDS")]
    pub fields: Option<String>,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Print phase timing to stderr for debugging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
    /// Contact id only, one per line (for piping to other commands).
    Id,
    /// Display name only, one per line.
    Name,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all contacts in the directory.
    List(ListArgs),
    /// Fuzzy-search contacts, search-as-you-type style.
    Search(SearchArgs),
    /// Show a single contact by id.
    Show(ShowArgs),
}

/// Arguments for `contactcli list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Contacts JSON file to load.
    #[arg(long, value_name = "PATH", default_value = "contacts.json")]
    pub file: PathBuf,

    /// Field to order by (case- and accent-insensitive).
    #[arg(long, value_name = "FIELD", default_value = "last_name")]
    pub sort: String,
}

/// Arguments for `contactcli search`.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Query string(s). Multiple values are replayed through one session
    /// as successive keystrokes; results are for the last query.
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub queries: Vec<String>,

    /// Contacts JSON file to load.
    #[arg(long, value_name = "PATH", default_value = "contacts.json")]
    pub file: PathBuf,

    /// Maximum number of results to return.
    #[arg(long, value_name = "N", default_value = "10")]
    pub limit: usize,

    /// Minimum aggregate score for a match to count.
    #[arg(long, value_name = "SCORE")]
    pub threshold: Option<f64>,

    /// Per-field weight override, e.g. --weight notes=1.5. Repeatable;
    /// unspecified fields keep their defaults.
    #[arg(long = "weight", value_name = "FIELD=W")]
    pub weights: Vec<String>,
}

/// Arguments for `contactcli show`.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Contact id.
    pub id: u64,

    /// Contacts JSON file to load.
    #[arg(long, value_name = "PATH", default_value = "contacts.json")]
    pub file: PathBuf,
}
