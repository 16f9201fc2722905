//! `pathmark mark`: highlight the shortest path and save the graph

use std::time::Instant;

use crate::cli::{Cli, MarkArgs};
use crate::commands::{io, report};
use pathmark_core::config::PathmarkConfig;
use pathmark_core::error::Result;
use pathmark_core::graph::HighlightMarker;
use pathmark_core::pipeline::mark_shortest_path;

/// Resolve the highlight marker: config file first, then command-line flags
fn resolve_marker(args: &MarkArgs) -> Result<HighlightMarker> {
    let mut config = match &args.config {
        Some(path) => PathmarkConfig::from_path(path)?,
        None => {
            tracing::debug!(source = %PathmarkConfig::source_display(), "load_config");
            PathmarkConfig::load()?
        }
    };

    if let Some(color) = &args.color {
        config.highlight.color.clone_from(color);
    }
    if let Some(font_color) = &args.font_color {
        config.highlight.font_color.clone_from(font_color);
    }
    if let Some(width) = args.line_width {
        config.highlight.line_width = width;
    }
    config.validate()?;

    tracing::debug!(marker = ?config.highlight, "resolved_marker");
    Ok(config.highlight)
}

/// Execute the mark command
pub fn execute(cli: &Cli, args: &MarkArgs) -> Result<()> {
    let start = Instant::now();
    let marker = resolve_marker(args)?;

    let mut graph = io::read_graph(&args.query.input)?;
    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_graph");
    }

    let result = mark_shortest_path(&mut graph, &args.query.from, &args.query.to, &marker)?;
    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "mark_path");
    }

    io::write_graph(&graph, args.output.as_deref())?;

    // Stdout carries the graph itself when no output file is given
    if args.output.is_some() {
        report::output_report(cli, &result)?;
    }
    Ok(())
}
