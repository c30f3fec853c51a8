use contact_pressure_trace::discovery::RunFiles;
use contact_pressure_trace::output::{
    read_report, render_pair_charts, render_stacked_chart, to_report, write_report, ChartConfig,
};
use contact_pressure_trace::parser::{extract, EngineConfig, IterationPolicy};
use contact_pressure_trace::series::SeriesSet;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::tempdir;

const HEADER: &str = "<CONTACT_PAIR=\" 3\">\n<CONTACT_PAIR=\" 4\">\n";

const TRACE: &str = "<COLUMN NUMBER=\" 1\">Contact Pair ID</COLUMN>
<COLUMN NUMBER=\" 2\">Max. Contact Pressure</COLUMN>
<COLDATA ITERATION=\" 1\">
3 1.5e2
4 2.0e2
</COLDATA>
<COLDATA ITERATION=\" 2\">
3 1.7e2
</COLDATA>
";

fn extraction() -> contact_pressure_trace::parser::Extraction {
    extract(HEADER.lines(), TRACE.lines(), &EngineConfig::new()).unwrap()
}

#[test]
fn test_report_round_trip() {
    let files = RunFiles {
        header: PathBuf::from("run.nlh"),
        trace: PathBuf::from("run.cnd"),
    };
    let report = to_report(&extraction(), Some(&files), IterationPolicy::RetainAndDeduplicate);

    let dir = tempdir().unwrap();
    let path = dir.path().join("out/report.json");
    write_report(&report, &path).unwrap();

    let loaded = read_report(&path).unwrap();
    assert_eq!(loaded, report);
    assert_eq!(loaded.series.len(), 2);
    assert_eq!(loaded.series[0].pair_id, 3);
    assert_eq!(loaded.series[0].peak_pressure, Some(170.0));
    assert_eq!(loaded.series[0].final_pressure, Some(170.0));
    assert_eq!(loaded.series[1].final_pressure, Some(200.0));
    assert_eq!(loaded.series[1].points.len(), 1);
    assert_eq!(loaded.trace_file.as_deref(), Some("run.cnd"));
    assert_eq!(loaded.total_points(), 3);
}

#[test]
fn test_read_report_rejects_garbage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(read_report(&path).is_err());
}

#[test]
fn test_render_pair_charts() {
    let dir = tempdir().unwrap();
    let written =
        render_pair_charts(&extraction().series, dir.path(), &ChartConfig::default()).unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("pair_3_contact_pressure_plot.svg"),
            dir.path().join("pair_4_contact_pressure_plot.svg"),
        ]
    );
    assert!(written.iter().all(|path| path.exists()));
}

#[test]
fn test_render_stacked_chart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("combined.svg");
    let config = ChartConfig::new().with_width(600).with_height_per_chart(300);

    assert!(render_stacked_chart(&extraction().series, &path, &config).unwrap());

    let svg = std::fs::read_to_string(&path).unwrap();
    // two panels of 300px each
    assert!(svg.contains("height=\"600\""));
    assert!(svg.contains("Pair 3 Contact Pressure Plot"));
    assert!(svg.contains("Pair 4 Contact Pressure Plot"));
}

#[test]
fn test_render_stacked_chart_empty_set() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("combined.svg");

    assert!(!render_stacked_chart(&SeriesSet::default(), &path, &ChartConfig::default()).unwrap());
    assert!(!path.exists());
}
