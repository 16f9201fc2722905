use crate::cli::Cli;
use pathmark_core::pipeline::PathReport;

/// Output in human-readable format
pub fn output_human(cli: &Cli, report: &PathReport) {
    println!("{}", report.path.join(" -- "));
    if cli.quiet {
        return;
    }

    let hops = report.hops();
    println!(
        "distance {} over {} {}",
        report.distance,
        hops,
        if hops == 1 { "edge" } else { "edges" }
    );
    if let Some(count) = report.highlighted_edges {
        println!("highlighted {} vertices and {} edges", report.path.len(), count);
    }
}
