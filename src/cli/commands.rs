//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kintone REST API command-line client
#[derive(Parser, Debug)]
#[command(name = "kintone-rest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON); `KINTONE_*` variables override it
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one record
    Record {
        /// App id
        #[arg(long)]
        app: String,

        /// Record id
        #[arg(long)]
        id: String,
    },

    /// Fetch one page of records
    Records {
        /// App id
        #[arg(long)]
        app: String,

        /// Query string, paging clauses included
        #[arg(short, long, default_value = "")]
        query: String,

        /// Fields to return (comma-separated, empty = all)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Report the total match count on stderr
        #[arg(long)]
        total_count: bool,
    },

    /// Fetch every matching record with offset paging
    All {
        /// App id
        #[arg(long)]
        app: String,

        /// Filter expression (no order/limit/offset)
        #[arg(long, default_value = "")]
        condition: String,

        /// Sort expression, e.g. `$id asc`
        #[arg(long, default_value = "")]
        order_by: String,

        /// Fields to return (comma-separated, empty = all)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
    },

    /// Stream every matching record through a server-side cursor
    Cursor {
        /// App id
        #[arg(long)]
        app: String,

        /// Filter and sort query (no limit/offset)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Fields to return (comma-separated, empty = all)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Records per batch
        #[arg(long, default_value_t = crate::record::MAX_CURSOR_SIZE)]
        size: u32,
    },

    /// Show app information
    App {
        /// App id
        #[arg(long)]
        app: String,

        /// Show form field settings instead of the app summary
        #[arg(long)]
        form_fields: bool,

        /// Label language for form fields (ja, en, zh, default)
        #[arg(long)]
        lang: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one value per line)
    Json,
    /// Human-readable output
    Pretty,
}
