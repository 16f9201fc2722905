//! CLI argument parsing for pathmark
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use pathmark_core::format::OutputFormat;

/// Pathmark - highlight the shortest path through an undirected DOT graph
#[derive(Parser, Debug)]
#[command(name = "pathmark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format for reports
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `pathmark_core=trace`)
    #[arg(long, global = true, env = "PATHMARK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the shortest path between two vertices
    Path(QueryArgs),

    /// Highlight the shortest path and write the annotated graph
    Mark(MarkArgs),
}

/// Graph input and the two endpoints of the path
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// DOT file with an undirected graph (`-` reads stdin)
    pub input: PathBuf,

    /// Start vertex identity
    #[arg(long, short)]
    pub from: String,

    /// Destination vertex identity
    #[arg(long, short)]
    pub to: String,
}

#[derive(Args, Debug, Clone)]
pub struct MarkArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Write the annotated graph here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file to read instead of the user config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Highlight color for vertices and edges
    #[arg(long)]
    pub color: Option<String>,

    /// Highlight font color for vertices and edges
    #[arg(long)]
    pub font_color: Option<String>,

    /// Highlight line width for vertices and edges
    #[arg(long, value_parser = parse_line_width)]
    pub line_width: Option<f64>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn parse_line_width(s: &str) -> Result<f64, String> {
    let width: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(format!("line width must be positive, got {}", s))
    }
}
