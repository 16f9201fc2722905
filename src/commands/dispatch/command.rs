//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use pathmark_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathmark {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Highlight the shortest path through an undirected Graphviz graph.");
        println!();
        println!("Run `pathmark --help` for usage information.");
        Ok(())
    }
}
