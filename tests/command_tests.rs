use contact_pressure_trace::commands::{
    execute_extract, validate_report_file, ExtractArgs, InputSource,
};
use contact_pressure_trace::parser::IterationPolicy;
use contact_pressure_trace::Readiness;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const HEADER: &str = "<CONTACT_PAIR=\" 1\">\n";

const TRACE: &str = "<COLUMN NUMBER=\" 1\">Contact Pair ID</COLUMN>
<COLUMN NUMBER=\" 2\">Max. Contact Pressure</COLUMN>
<COLDATA ITERATION=\" 0\">
1 1.0
</COLDATA>
<COLDATA ITERATION=\" 1\">
1 2.0
</COLDATA>
";

#[test]
fn test_extract_from_run_directory() {
    let run = tempdir().unwrap();
    fs::write(run.path().join("file.nlh"), HEADER).unwrap();
    fs::write(run.path().join("file.cnd"), TRACE).unwrap();

    let out = tempdir().unwrap();
    let json = out.path().join("report.json");
    let args = ExtractArgs {
        input: InputSource::Directory(run.path().to_path_buf()),
        output_json: Some(json.clone()),
        chart_dir: Some(out.path().join("charts")),
        combined_chart: Some(out.path().join("all.svg")),
        ..Default::default()
    };

    let report = execute_extract(&args).unwrap().ready().unwrap();

    assert_eq!(report.series.len(), 1);
    assert_eq!(report.series[0].points.len(), 2);
    assert!(json.exists());
    assert!(out.path().join("charts/pair_1_contact_pressure_plot.svg").exists());
    assert!(out.path().join("all.svg").exists());

    let validated = validate_report_file(&json).unwrap();
    assert_eq!(validated, report);
}

#[test]
fn test_extract_with_explicit_files_and_drop_policy() {
    let run = tempdir().unwrap();
    let header = run.path().join("a.hdr");
    let trace = run.path().join("a.log");
    fs::write(&header, HEADER).unwrap();
    fs::write(&trace, TRACE).unwrap();

    let args = ExtractArgs {
        input: InputSource::Files { header, trace },
        output_json: None,
        policy: IterationPolicy::DropIterationZero,
        ..Default::default()
    };

    let report = execute_extract(&args).unwrap().ready().unwrap();

    assert_eq!(report.policy, IterationPolicy::DropIterationZero);
    assert_eq!(report.series[0].points.len(), 1);
    assert_eq!(report.series[0].points[0].pressure, 2.0);
    assert_eq!(report.series[0].points[0].step, 1);
}

#[test]
fn test_extract_missing_trace_is_not_ready() {
    let run = tempdir().unwrap();
    fs::write(run.path().join("file.nlh"), HEADER).unwrap();

    let args = ExtractArgs {
        input: InputSource::Directory(run.path().to_path_buf()),
        output_json: Some(run.path().join("report.json")),
        ..Default::default()
    };

    match execute_extract(&args).unwrap() {
        Readiness::NotReady(missing) => assert!(missing.to_string().contains("solver")),
        Readiness::Ready(_) => panic!("trace file is missing"),
    }
    assert!(!run.path().join("report.json").exists());
}

#[test]
fn test_extract_fatal_block_is_an_error() {
    let run = tempdir().unwrap();
    fs::write(run.path().join("file.nlh"), HEADER).unwrap();
    fs::write(run.path().join("file.cnd"), "<COLDATA ITERATION=\" x\">\n").unwrap();

    let args = ExtractArgs {
        input: InputSource::Directory(run.path().to_path_buf()),
        output_json: None,
        ..Default::default()
    };

    let err = execute_extract(&args).unwrap_err();
    assert!(format!("{:#}", err).contains("line 1"));
}
