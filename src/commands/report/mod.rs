//! Rendering of path reports in the selected output format

mod human;
mod json;
mod records;

use crate::cli::{Cli, OutputFormat};
use pathmark_core::error::Result;
use pathmark_core::pipeline::PathReport;

/// Print `report` to stdout in the format chosen on the command line
pub fn output_report(cli: &Cli, report: &PathReport) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            human::output_human(cli, report);
            Ok(())
        }
        OutputFormat::Json => json::output_json(report),
        OutputFormat::Records => {
            records::output_records(report);
            Ok(())
        }
    }
}
