//! Command dispatch logic for pathmark

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use pathmark_core::error::Result;

mod command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Path(args) => commands::path::execute(ctx.cli, args),
            Commands::Mark(args) => commands::mark::execute(ctx.cli, args),
        };
        if ctx.cli.verbose {
            tracing::debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        }
        result
    }
}
