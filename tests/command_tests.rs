use pretty_assertions::assert_eq;
use sample_tree::commands::{execute_view, OutputFormat, ViewArgs};
use sample_tree::output::OutlineConfig;
use sample_tree::{load_trace, ParseError};
use std::io::Write;
use tempfile::NamedTempFile;

fn trace_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const TRACE: &str = "\
Call graph:
    12 main
    + 12 main
    +   9 work
    +   3 idle
";

fn view(file: &NamedTempFile, format: OutputFormat, print_summary: bool) -> anyhow::Result<String> {
    let args = ViewArgs {
        trace: file.path().to_path_buf(),
        format,
        outline: OutlineConfig::new().with_bar_width(0),
        print_summary,
        ..Default::default()
    };

    let mut buffer = Vec::new();
    execute_view(&args, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap())
}

#[test]
fn test_load_trace_runs_full_pipeline() {
    let file = trace_file(TRACE);

    let root = load_trace(file.path()).unwrap();

    let main = &root.children[0];
    assert_eq!(main.label(), "main");
    assert_eq!(main.total_value, 12);
    let names: Vec<&str> = main.children.iter().map(|c| c.label()).collect();
    assert_eq!(names, vec!["work", "idle"]);
    assert_eq!(main.children[0].ratio, Some(0.75));
}

#[test]
fn test_view_outline() {
    let file = trace_file(TRACE);

    let output = view(&file, OutputFormat::Outline, false).unwrap();

    assert_eq!(
        output,
        "▾ main  12 100.0%\n  • work  9  75.0%\n  • idle  3  25.0%\n"
    );
}

#[test]
fn test_view_collapsed() {
    let file = trace_file(TRACE);

    let output = view(&file, OutputFormat::Collapsed, false).unwrap();

    assert_eq!(output, "main;work 9\nmain;idle 3\n");
}

#[test]
fn test_view_json() {
    let file = trace_file(TRACE);

    let output = view(&file, OutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["frames"][0]["total"], 12);
    assert_eq!(value["frames"][0]["children"].as_array().unwrap().len(), 2);
}

#[test]
fn test_view_summary() {
    let file = trace_file(TRACE);

    let output = view(&file, OutputFormat::Outline, true).unwrap();

    assert!(output.contains("Samples: 12 | Frames: 3 | Leaves: 2 | Height: 2"));
    assert!(output.contains("main;work"));
    assert!(output.contains("75.0%"));
}

#[test]
fn test_view_rejects_corrupt_trace() {
    let file = trace_file("    5 main\n    + 9 work\n");

    let err = view(&file, OutputFormat::Outline, false).unwrap_err();

    let parse_error = err.downcast_ref::<ParseError>().unwrap();
    assert!(matches!(parse_error, ParseError::ValueConsistency { line: 2, .. }));
}
