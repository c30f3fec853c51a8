//! Extract command implementation.
//!
//! The extract command:
//! 1. Locates the header and trace files
//! 2. Parses the trace into per-pair series
//! 3. Writes the JSON report
//! 4. Renders charts

use super::models::{ExtractArgs, InputSource};
use super::utils::print_summary;
use crate::discovery::{locate_run_files, Readiness, RunFiles};
use crate::output::{
    render_pair_charts, render_stacked_chart, to_report, write_report, PressureReport,
};
use crate::parser::{extract_from_files, EngineConfig};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the extract command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report, or `Readiness::NotReady` if the solver has not produced
/// both files yet (not an error)
///
/// # Errors
/// * Unreadable run directory or input files
/// * A block marker without a usable iteration
/// * File write errors
pub fn execute_extract(args: &ExtractArgs) -> Result<Readiness<PressureReport>> {
    let start_time = Instant::now();

    // Step 1: Locate input files
    info!("Step 1/4: Locating solver output...");
    let files = match resolve_input(args)? {
        Readiness::Ready(files) => files,
        Readiness::NotReady(missing) => {
            info!("No input yet: {}", missing);
            return Ok(Readiness::NotReady(missing));
        }
    };
    info!("Header file: {}", files.header.display());
    info!("Trace file: {}", files.trace.display());

    // Step 2: Parse
    info!("Step 2/4: Parsing contact pressure trace...");
    let config = EngineConfig::new().with_policy(args.policy);
    let extraction = match extract_from_files(&files, &config)
        .with_context(|| format!("Failed to parse trace {}", files.trace.display()))?
    {
        Readiness::Ready(extraction) => extraction,
        Readiness::NotReady(missing) => {
            info!("No input yet: {}", missing);
            return Ok(Readiness::NotReady(missing));
        }
    };
    info!("Parsed trace: {}", extraction.stats.summary());

    for series in extraction.series.iter() {
        debug!("Pair {}: {} points", series.pair_id, series.len());
    }

    let report = to_report(&extraction, Some(&files), args.policy);

    // Step 3: JSON
    if let Some(path) = &args.output_json {
        info!("Step 3/4: Writing JSON report...");
        write_report(&report, path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", path.display());
    } else {
        info!("Step 3/4: Skipping JSON report (not requested)");
    }

    // Step 4: Charts
    if args.chart_dir.is_none() && args.combined_chart.is_none() {
        info!("Step 4/4: Skipping charts (not requested)");
    } else {
        info!("Step 4/4: Rendering charts...");
    }

    if let Some(dir) = &args.chart_dir {
        let written = render_pair_charts(&extraction.series, dir, &args.chart_config)
            .context("Failed to render pair charts")?;
        info!("✓ {} chart(s) written to: {}", written.len(), dir.display());
    }

    if let Some(path) = &args.combined_chart {
        if render_stacked_chart(&extraction.series, path, &args.chart_config)
            .context("Failed to render stacked chart")?
        {
            info!("✓ Stacked chart written to: {}", path.display());
        }
    }

    if args.print_summary {
        print_summary(&report);
    }

    let elapsed = start_time.elapsed();
    info!("Extraction completed in {:.2}s", elapsed.as_secs_f64());

    Ok(Readiness::Ready(report))
}

fn resolve_input(args: &ExtractArgs) -> Result<Readiness<RunFiles>> {
    match &args.input {
        InputSource::Directory(dir) => locate_run_files(dir, &args.discovery)
            .with_context(|| format!("Failed to scan {}", dir.display())),
        InputSource::Files { header, trace } => Ok(Readiness::Ready(RunFiles {
            header: header.clone(),
            trace: trace.clone(),
        })),
    }
}

/// Validate extract arguments
///
/// **Public** - can be called before execute_extract for early validation
pub fn validate_args(args: &ExtractArgs) -> Result<()> {
    if let InputSource::Files { header, trace } = &args.input {
        if header.as_os_str().is_empty() || trace.as_os_str().is_empty() {
            anyhow::bail!("Header and trace paths cannot be empty");
        }
        if header == trace {
            anyhow::bail!("Header and trace must be different files");
        }
    }

    if args.discovery.header_extension.is_empty() || args.discovery.trace_extension.is_empty() {
        anyhow::bail!("File extensions cannot be empty");
    }

    if args.discovery.header_extension == args.discovery.trace_extension {
        anyhow::bail!("Header and trace extensions must differ");
    }

    if args.chart_config.width == 0 || args.chart_config.height_per_chart == 0 {
        anyhow::bail!("Chart dimensions must be greater than 0");
    }

    if args.chart_config.width > 10_000 || args.chart_config.height_per_chart > 10_000 {
        anyhow::bail!("Chart dimensions are too large (max 10000)");
    }

    Ok(())
}
