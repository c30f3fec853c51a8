use crate::discovery::DiscoveryConfig;
use crate::output::ChartConfig;
use crate::parser::IterationPolicy;
use std::path::PathBuf;

/// Where the solver output comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Scan a run directory for the header and trace files
    Directory(PathBuf),
    /// Use the given files as-is
    Files { header: PathBuf, trace: PathBuf },
}

/// Arguments for the extract command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ExtractArgs {
    pub input: InputSource,

    /// Extensions used when scanning a directory
    pub discovery: DiscoveryConfig,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Directory for one SVG chart per pair (optional)
    pub chart_dir: Option<PathBuf>,

    /// Output path for the stacked SVG chart (optional)
    pub combined_chart: Option<PathBuf>,

    pub chart_config: ChartConfig,

    pub policy: IterationPolicy,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ExtractArgs {
    fn default() -> Self {
        Self {
            input: InputSource::Directory(PathBuf::from(".")),
            discovery: DiscoveryConfig::default(),
            output_json: Some(PathBuf::from("contact_pressure.json")),
            chart_dir: None,
            combined_chart: None,
            chart_config: ChartConfig::default(),
            policy: IterationPolicy::default(),
            print_summary: false,
        }
    }
}
