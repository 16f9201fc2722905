use pathmark_core::format::escape_record_value;
use pathmark_core::pipeline::PathReport;

/// Output in records format: a header line, one `N` line per vertex in path
/// order, and an optional `M` line with the highlight count.
pub fn output_records(report: &PathReport) {
    println!(
        "H pathmark=1 from={} to={} distance={} hops={}",
        escape_record_value(&report.from),
        escape_record_value(&report.to),
        report.distance,
        report.hops()
    );
    for (position, id) in report.path.iter().enumerate() {
        println!("N {} {}", position, escape_record_value(id));
    }
    if let Some(count) = report.highlighted_edges {
        println!("M vertices={} edges={}", report.path.len(), count);
    }
}
