//! Pathmark - shortest-path highlighter for Graphviz graphs
//!
//! Reads an undirected DOT graph, finds the minimum-weight path between two
//! vertices and writes the graph back with that path highlighted.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use pathmark_core::error::{ExitCode as PathmarkExitCode, PathmarkError};
use pathmark_core::logging::{self, LogOptions};

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `Cli.format` exists; honour a JSON request
            // seen on the raw command line.
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => PathmarkError::UsageError(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let log_opts = LogOptions {
        verbose: cli.verbose,
        level: cli.log_level.clone(),
        json: cli.log_json,
    };
    if let Err(e) = logging::init_tracing(&log_opts) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(PathmarkExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    requests_json(env::args().skip(1))
}

/// Whether `--format json` appears in `args`, ignoring case like `OutputFormat`
fn requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) {
                return true;
            }
        } else if let Some(value) = arg.strip_prefix("--format=") {
            if value.eq_ignore_ascii_case("json") {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_requests_json() {
        assert!(requests_json(args(&["--format", "json", "path"])));
        assert!(requests_json(args(&["path", "--format=json"])));
        assert!(!requests_json(args(&["--format", "human"])));
        assert!(!requests_json(args(&["json"])));
        assert!(!requests_json(args(&["--format"])));
    }

    #[test]
    fn test_requests_json_ignores_case() {
        assert!(requests_json(args(&["--format", "JSON"])));
        assert!(requests_json(args(&["--format=Json"])));
    }
}
