use crate::output::{read_report, PressureReport};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a JSON report file
pub fn validate_report_file(file_path: &Path) -> Result<PressureReport> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Contact Pairs: {}", report.series.len());
    println!("  Points: {}", report.total_points());

    if report.version != REPORT_SCHEMA_VERSION {
        println!(
            "  Warning: schema v{} differs from current v{}",
            report.version, REPORT_SCHEMA_VERSION
        );
    }

    Ok(report)
}

/// Print a per-pair text summary
pub fn print_summary(report: &PressureReport) {
    println!("\n{}", "=".repeat(80));
    println!("CONTACT PRESSURE SUMMARY");
    println!("{}", "=".repeat(80));
    if let Some(trace) = &report.trace_file {
        println!("Trace:        {}", trace);
    }
    println!("Blocks:       {}", report.stats.blocks);
    println!("Observations: {}", report.stats.observations);
    println!("Malformed:    {}", report.stats.malformed_rows);
    println!();
    println!("{:>10} {:>8} {:>18} {:>18}", "Pair", "Steps", "Peak Pressure", "Final Pressure");
    for series in &report.series {
        println!(
            "{:>10} {:>8} {:>18} {:>18}",
            series.pair_id,
            series.points.len(),
            format_pressure(series.peak_pressure),
            format_pressure(series.final_pressure),
        );
    }
    println!("{}", "=".repeat(80));
}

fn format_pressure(pressure: Option<f64>) -> String {
    pressure.map_or_else(|| "-".to_string(), |p| format!("{:.4e}", p))
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Contact Pressure Report Schema");
    println!("Current Version: {}", REPORT_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string     - ISO 8601 timestamp");
        println!("  header_file: string?     - Header (.nlh) file used");
        println!("  trace_file: string?      - Trace (.cnd) file used");
        println!("  policy: string           - retain_and_deduplicate | drop_iteration_zero");
        println!("  stats: object            - Line counters for the trace pass");
        println!("  series: array            - One entry per contact pair");
        println!("    pair_id: number        - Contact pair id");
        println!("    peak_pressure: number? - Highest pressure in the series");
        println!("    final_pressure: number? - Pressure at the last step");
        println!("    points: array          - step, iteration, pressure");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Contact Pressure Trace v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Peak contact pressure per contact pair from mechanical solver traces.");
}
