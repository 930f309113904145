use clap::Parser;
use echoes::cli::{Args, Format, RunConfig};
use echoes::output::render;
use echoes_lib::constants::PROCESSOR_NAME;
use echoes_lib::processor::DataProcessor;
use echoes_lib::report::{Report, Status};

fn run(argv: &[&str]) -> (Report, String) {
    let args = Args::try_parse_from(std::iter::once("echoes").chain(argv.iter().copied()))
        .expect("Failed to parse arguments");
    let config = RunConfig::from_args(args).expect("Invalid configuration");
    let processor = DataProcessor::new(PROCESSOR_NAME);
    let report = Report::build(&processor, &config.items, &config.probe);
    let output = render(&report, config.format);
    (report, output)
}

#[test]
fn test_default_run_prints_sample_report() {
    let (report, output) = run(&[]);

    assert_eq!(report.status, Status::AllGood);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Processed: APPLE, BANANA, CHERRY, DATE",
            "Length: 27",
            "Count: 4, Doubled: 8, Remainder: 0",
            "All good!",
        ]
    );
}

#[test]
fn test_empty_run_reports_failure() {
    let (report, output) = run(&["--empty"]);

    assert!(!report.succeeded());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Processing failed!",
            "Count: 0, Doubled: 0, Remainder: 0",
            "No data to process",
        ]
    );
}

#[test]
fn test_blank_probe_with_items() {
    let (report, output) = run(&["-i", "one", "-i", "two", "-i", "three", "--probe", "   "]);

    assert_eq!(report.status, Status::SomethingWrong);
    assert!(output.contains("Count: 3, Doubled: 6, Remainder: 1"));
    assert!(output.ends_with("Something went wrong"));
}

#[test]
fn test_json_output_fields() {
    let (_, output) = run(&["--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&output).expect("Output is not JSON");

    assert_eq!(value["processor"], "test");
    assert_eq!(value["processed"], "APPLE, BANANA, CHERRY, DATE");
    assert_eq!(value["length"], 27);
    assert_eq!(value["count"], 4);
    assert_eq!(value["doubled"], 8);
    assert_eq!(value["remainder"], 0);
    assert_eq!(value["is_valid"], true);
    assert_eq!(value["is_empty"], false);
    assert_eq!(value["status"], "all_good");
}

#[test]
fn test_render_matches_format() {
    let processor = DataProcessor::new(PROCESSOR_NAME);
    let report = Report::build(&processor, &["x"], "test");

    assert!(render(&report, Format::Text).starts_with("Processed: X"));
    assert!(render(&report, Format::Json).starts_with('{'));
}

#[test]
fn test_single_empty_item_reports_failure() {
    let (report, output) = run(&["--item", ""]);

    assert_eq!(report.processed.as_deref(), Some(""));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Processing failed!",
            "Count: 1, Doubled: 2, Remainder: 1",
            "All good!",
        ]
    );
}

fn run_binary(argv: &[&str]) -> std::process::Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_echoes"))
        .args(argv)
        .output()
        .expect("Failed to run echoes binary")
}

#[test]
fn test_binary_default_run_succeeds() {
    let output = run_binary(&["--quiet"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Processed: APPLE, BANANA, CHERRY, DATE"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_binary_unknown_format_exits_one() {
    let output = run_binary(&["--format", "xml"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Unknown format 'xml'. Use 'text' or 'json'"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_too_many_items_exits_one() {
    let mut argv = Vec::new();
    for _ in 0..=echoes_lib::constants::MAX_ITEMS {
        argv.push("-i");
        argv.push("x");
    }
    let output = run_binary(&argv);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: Too many items"));
}
