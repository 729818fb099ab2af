use std::fs;
use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn synth(path: &Path, seed: u64) {
    let mut cmd = Command::cargo_bin("kira-gazeqc").unwrap();
    cmd.arg("synth")
        .arg("--out")
        .arg(path)
        .arg("--seed")
        .arg(seed.to_string())
        .arg("--pupil");
    cmd.assert().success();
}

#[test]
fn synth_then_validate() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("demo.json");
    synth(&input, 1);
    let json: Value = serde_json::from_str(&fs::read_to_string(&input).unwrap()).unwrap();
    assert_eq!(json["timestamps"].as_array().unwrap().len(), 5000);

    let mut cmd = Command::cargo_bin("kira-gazeqc").unwrap();
    cmd.arg("validate").arg("--input").arg(&input);
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("kira-gazeqc validate ok"));
    assert!(text.contains("samples: 5000"));
}

#[test]
fn run_writes_all_outputs() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("subject.json");
    synth(&input, 3);
    let out_dir = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("kira-gazeqc").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out_dir)
        .arg("--json")
        .arg("--tsv")
        .arg("--report");
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Highest risk:"));

    let json: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("gazeqc.json")).unwrap()).unwrap();
    assert_eq!(json["tool"], "kira-gazeqc");
    assert_eq!(json["events"]["events_tsv_path"], "gazeqc_events.tsv");
    assert_eq!(json["disease_analysis"].as_object().unwrap().len(), 4);

    let tsv = fs::read_to_string(out_dir.join("gazeqc_events.tsv")).unwrap();
    assert!(tsv.starts_with("type\tstart_index"));

    let report = fs::read_to_string(out_dir.join("gazeqc_report.txt")).unwrap();
    assert!(report.contains("EYE TRACKING DISEASE DETECTION REPORT"));
}

#[test]
fn run_limits_diseases_and_applies_overrides() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("subject.json");
    synth(&input, 4);
    let out_dir = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("kira-gazeqc").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out_dir)
        .arg("--json")
        .arg("--diseases")
        .arg("adhd,Parkinsons")
        .arg("--velocity-threshold")
        .arg("45");
    cmd.assert().success();

    let json: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("gazeqc.json")).unwrap()).unwrap();
    let keys: Vec<&String> = json["disease_analysis"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["adhd", "parkinsons"]);
    assert_eq!(json["config"]["velocity_threshold_deg_s"], 45.0);
}

#[test]
fn run_rejects_unknown_disease() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("subject.json");
    synth(&input, 5);

    let mut cmd = Command::cargo_bin("kira-gazeqc").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(tmp.path().join("out"))
        .arg("--diseases")
        .arg("flu");
    cmd.assert().failure();
}

#[test]
fn run_rejects_malformed_recording() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("bad.json");
    fs::write(
        &input,
        r#"{"timestamps": [0, 1, 2], "x_positions": [0, 0], "y_positions": [0, 0, 0]}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("kira-gazeqc").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(tmp.path().join("out"))
        .arg("--json");
    cmd.assert().failure();
    assert!(!tmp.path().join("out").join("gazeqc.json").exists());
}

#[test]
fn batch_run_writes_one_directory_per_input() {
    let tmp = TempDir::new().unwrap();
    let a = tmp.path().join("p01.json");
    let b = tmp.path().join("p02.json");
    synth(&a, 10);
    synth(&b, 11);
    let out_dir = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("kira-gazeqc").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&a)
        .arg(&b)
        .arg("--out")
        .arg(&out_dir)
        .arg("--json")
        .arg("--threads")
        .arg("2");
    cmd.assert().success();

    assert!(out_dir.join("p01").join("gazeqc.json").exists());
    assert!(out_dir.join("p02").join("gazeqc.json").exists());
    let batch = fs::read_to_string(out_dir.join("gazeqc_batch.tsv")).unwrap();
    let rows: Vec<&str> = batch.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[1].starts_with("p01\t"));
    assert!(rows[2].starts_with("p02\t"));
}

#[test]
fn synth_rejects_huge_duration() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("huge.json");
    let mut cmd = Command::cargo_bin("kira-gazeqc").unwrap();
    cmd.arg("synth")
        .arg("--out")
        .arg(&out)
        .arg("--duration-ms")
        .arg("1e30");
    cmd.assert().failure();
    assert!(!out.exists());
}
