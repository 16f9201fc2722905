use pathmark_core::error::Result;
use pathmark_core::pipeline::PathReport;

/// Output in JSON format
pub fn output_json(report: &PathReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
