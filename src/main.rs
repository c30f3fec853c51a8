//! Contact Pressure Trace CLI
//!
//! Extracts peak contact pressure series from mechanical solver traces
//! and writes JSON reports and SVG charts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use contact_pressure_trace::commands::{
    display_schema, display_version, execute_extract, validate_args, validate_report_file,
    ExtractArgs, InputSource,
};
use contact_pressure_trace::discovery::DiscoveryConfig;
use contact_pressure_trace::output::ChartConfig;
use contact_pressure_trace::parser::IterationPolicy;
use contact_pressure_trace::utils::config::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_HEADER_EXTENSION, DEFAULT_TRACE_EXTENSION,
    DROP_ITERATION_ZERO_ENV,
};
use env_logger::Env;
use log::info;
use std::path::PathBuf;

/// Contact Pressure Trace - peak contact pressure per contact pair
#[derive(Parser, Debug)]
#[command(name = "cp-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract pressure series from a solver run
    Extract {
        /// Run directory to scan for the header and trace files
        #[arg(short, long, default_value = ".", conflicts_with_all = ["header", "trace"])]
        dir: PathBuf,

        /// Header file naming the contact pairs (requires --trace)
        #[arg(long, requires = "trace")]
        header: Option<PathBuf>,

        /// Trace file with contact results (requires --header)
        #[arg(long, requires = "header")]
        trace: Option<PathBuf>,

        /// Header file extension used when scanning --dir
        #[arg(long, default_value = DEFAULT_HEADER_EXTENSION)]
        header_ext: String,

        /// Trace file extension used when scanning --dir
        #[arg(long, default_value = DEFAULT_TRACE_EXTENSION)]
        trace_ext: String,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "contact_pressure.json")]
        output: PathBuf,

        /// Skip the JSON report
        #[arg(long)]
        no_json: bool,

        /// Directory for one SVG chart per contact pair
        #[arg(long)]
        charts: Option<PathBuf>,

        /// Output path for all charts stacked into one SVG
        #[arg(long)]
        combined: Option<PathBuf>,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: u32,

        /// Height of each pair's chart in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
        height: u32,

        /// Discard every row recorded at iteration 0 instead of deduplicating retries
        #[arg(long, env = DROP_ITERATION_ZERO_ENV)]
        drop_iteration_zero: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a JSON report file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Extract {
            dir,
            header,
            trace,
            header_ext,
            trace_ext,
            output,
            no_json,
            charts,
            combined,
            width,
            height,
            drop_iteration_zero,
            summary,
        } => {
            let input = match (header, trace) {
                (Some(header), Some(trace)) => InputSource::Files { header, trace },
                _ => InputSource::Directory(dir),
            };

            let policy = if drop_iteration_zero {
                IterationPolicy::DropIterationZero
            } else {
                IterationPolicy::RetainAndDeduplicate
            };

            let args = ExtractArgs {
                input,
                discovery: DiscoveryConfig::default()
                    .with_header_extension(header_ext)
                    .with_trace_extension(trace_ext),
                output_json: (!no_json).then_some(output),
                chart_dir: charts,
                combined_chart: combined,
                chart_config: ChartConfig::new().with_width(width).with_height_per_chart(height),
                policy,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            if !execute_extract(&args)?.is_ready() {
                info!("Nothing extracted; run again once the solver has written its output");
            }
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
