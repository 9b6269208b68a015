//! End-to-end tests for the validation run.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1251;
use entry_cli::pipeline::{RunConfig, run};
use entry_model::FieldName;
use entry_report::SummaryTarget;
use serde_json::{Value, json};
use tempfile::TempDir;

fn valid_record() -> Value {
    json!({
        "telephone": "+7-(123)-456-78-90",
        "snils": "12345678901",
        "passport_series": "12 34",
        "height": "1.75",
        "work_experience": "5",
        "address": "Ленина 10",
        "university": "МГУ",
        "academic_degree": "PhD",
        "worldview": "atheism",
    })
}

fn write_input(dir: &TempDir, records: &Value) -> PathBuf {
    let text = serde_json::to_string_pretty(records).expect("serialize input");
    let (bytes, _, had_errors) = WINDOWS_1251.encode(&text);
    assert!(!had_errors);
    let path = dir.path().join("36.txt");
    fs::write(&path, &bytes).expect("write input");
    path
}

fn config(dir: &TempDir, input: &Path) -> RunConfig {
    RunConfig {
        input_file: input.to_path_buf(),
        summary: SummaryTarget::File(dir.path().join("36_result.txt")),
        valid_file: dir.path().join("valid_data.txt"),
        show_progress: false,
        ..RunConfig::default()
    }
}

fn read_summary(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("36_result.txt")).expect("read summary")
}

fn read_valid(dir: &TempDir) -> Value {
    let text = fs::read_to_string(dir.path().join("valid_data.txt")).expect("read valid entries");
    serde_json::from_str(&text).expect("valid entries are JSON")
}

#[test]
fn valid_record_end_to_end() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(&dir, &json!([valid_record()]));

    let result = run(&config(&dir, &input)).expect("run");

    assert_eq!(result.total, 1);
    assert_eq!(result.valid, 1);
    assert_eq!(result.invalid, 0);
    assert_eq!(result.summary.total(), 0);
    assert!(read_summary(&dir).starts_with("Total errors: 0\n"));

    let valid = read_valid(&dir);
    let records = valid.as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["university"], "МГУ");
    assert_eq!(records[0]["address"], "Ленина 10");
    assert_eq!(records[0]["height"], json!(1.75));
    assert_eq!(records[0]["work_experience"], json!(5));
}

#[test]
fn bad_telephone_end_to_end() {
    let dir = TempDir::new().expect("temp dir");
    let mut record = valid_record();
    record["telephone"] = json!("+71234567890");
    let input = write_input(&dir, &json!([record]));

    let result = run(&config(&dir, &input)).expect("run");

    assert_eq!(result.invalid, 1);
    assert_eq!(result.summary.count(FieldName::Telephone), 1);
    insta::assert_snapshot!(read_summary(&dir).trim_end(), @r"
    Total errors: 1
    telephone: 1
    height: 0
    snils: 0
    passport_series: 0
    university: 0
    work_experience: 0
    academic_degree: 0
    worldview: 0
    address: 0
    ");
    assert_eq!(read_valid(&dir), json!([]));
}

#[test]
fn mixed_batch_keeps_counts() {
    let dir = TempDir::new().expect("temp dir");
    let mut bad_height = valid_record();
    bad_height["height"] = json!("2.10");
    let mut bad_both = valid_record();
    bad_both["telephone"] = json!("8-800-555-35-35");
    bad_both["snils"] = json!("123");
    let mut second_valid = valid_record();
    second_valid["worldview"] = json!("Стоицизм");
    let input = write_input(
        &dir,
        &json!([valid_record(), bad_height, bad_both, second_valid]),
    );

    let result = run(&config(&dir, &input)).expect("run");

    assert_eq!(result.total, 4);
    assert_eq!(result.valid + result.invalid, result.total);
    assert_eq!(result.summary.count(FieldName::Height), 1);
    assert_eq!(result.summary.count(FieldName::Telephone), 1);
    assert_eq!(result.summary.count(FieldName::Snils), 0);
    assert_eq!(result.summary.total(), result.invalid);

    let valid = read_valid(&dir);
    let worldviews: Vec<&str> = valid
        .as_array()
        .expect("array")
        .iter()
        .map(|record| record["worldview"].as_str().expect("worldview"))
        .collect();
    assert_eq!(worldviews, vec!["atheism", "Стоицизм"]);
}

#[test]
fn missing_field_aborts_without_outputs() {
    let dir = TempDir::new().expect("temp dir");
    let mut incomplete = valid_record();
    incomplete
        .as_object_mut()
        .expect("object")
        .remove("passport_series");
    let input = write_input(&dir, &json!([valid_record(), incomplete]));

    let error = run(&config(&dir, &input)).expect_err("missing field must fail");

    let message = format!("{error:#}");
    assert!(message.contains("entry 1 is malformed"), "{message}");
    assert!(message.contains("passport_series"), "{message}");
    assert!(!dir.path().join("36_result.txt").exists());
    assert!(!dir.path().join("valid_data.txt").exists());
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("absent.txt");

    let error = run(&config(&dir, &input)).expect_err("missing input must fail");

    assert!(format!("{error:#}").contains("input file not found"));
}

#[test]
fn unknown_encoding_fails() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(&dir, &json!([valid_record()]));
    let config = RunConfig {
        encoding: "not-an-encoding".to_string(),
        ..config(&dir, &input)
    };

    let error = run(&config).expect_err("unknown encoding must fail");

    assert!(format!("{error:#}").contains("unknown encoding 'not-an-encoding'"));
}

#[test]
fn utf8_input_with_matching_encoding() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("utf8.json");
    let text = serde_json::to_string(&json!([valid_record()])).expect("serialize input");
    fs::write(&path, text).expect("write input");
    let config = RunConfig {
        encoding: "utf-8".to_string(),
        ..config(&dir, &path)
    };

    let result = run(&config).expect("run");

    assert_eq!(result.valid, 1);
}
