//! `pathmark path`: report the shortest path without writing anything

use crate::cli::{Cli, QueryArgs};
use crate::commands::{io, report};
use pathmark_core::error::Result;
use pathmark_core::pipeline::describe_shortest_path;

/// Execute the path command
pub fn execute(cli: &Cli, args: &QueryArgs) -> Result<()> {
    let graph = io::read_graph(&args.input)?;
    let result = describe_shortest_path(&graph, &args.from, &args.to)?;
    report::output_report(cli, &result)
}
