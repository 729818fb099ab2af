use kira_gazeqc::config::PipelineConfig;
use kira_gazeqc::ctx::Ctx;
use kira_gazeqc::features::FeatureVector;
use kira_gazeqc::io::json_writer::build_report;
use kira_gazeqc::pipeline;
use kira_gazeqc::scores::{Disease, DiseaseSelection};
use kira_gazeqc::synth::{SynthSpec, generate};
use serde_json::Value;
use tempfile::TempDir;

fn run_ctx(selection: DiseaseSelection) -> (TempDir, Ctx) {
    let tmp = TempDir::new().unwrap();
    let recording = generate(&SynthSpec {
        subject_id: Some("DEMO_001".to_string()),
        ..SynthSpec::default()
    })
    .unwrap();
    let mut ctx = Ctx::from_recording(
        recording,
        "demo",
        tmp.path().join("out"),
        PipelineConfig::default(),
        selection,
        "0.0.0-test",
    );
    pipeline::full().run(&mut ctx).unwrap();
    (tmp, ctx)
}

#[test]
fn json_report_populated() {
    let (_tmp, ctx) = run_ctx(DiseaseSelection::all());
    let report = build_report(&ctx).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "kira-gazeqc");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["input_meta"]["subject_id"], "DEMO_001");
    assert_eq!(json["input_meta"]["samples"], 5000);
    assert_eq!(json["input_meta"]["has_pupil"], true);
    assert_eq!(json["config"]["velocity_threshold_deg_s"], 30.0);
    assert!(json["events"]["filter"].as_str().unwrap().starts_with("savitzky_golay"));

    let features = json["features"].as_object().unwrap();
    assert_eq!(features.len(), FeatureVector::KEYS.len());

    let diseases = json["disease_analysis"].as_object().unwrap();
    for key in ["parkinsons", "alzheimers", "asd", "adhd"] {
        let entry = &diseases[key];
        let score = entry["risk_score"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&score));
        assert!(entry["indicators"].is_array());
        assert_eq!(
            json["explainability"]["rule_evaluations"][key]
                .as_array()
                .unwrap()
                .len(),
            4
        );
    }
    assert!(json["summary"]["overall_recommendations"].is_array());
    assert!(json["warnings"].is_array());
}

#[test]
fn json_report_respects_selection() {
    let (_tmp, ctx) = run_ctx(DiseaseSelection::only(&[Disease::Asd]));
    let json = serde_json::to_value(build_report(&ctx).unwrap()).unwrap();
    let diseases = json["disease_analysis"].as_object().unwrap();
    assert_eq!(diseases.keys().collect::<Vec<_>>(), vec!["asd"]);
    let highest = &json["summary"]["highest_risk_disease"];
    assert!(highest.is_null() || highest == &Value::from("asd"));
}

#[test]
fn ctx_result_matches_library_call() {
    let (_tmp, ctx) = run_ctx(DiseaseSelection::all());
    let from_ctx = ctx.result().unwrap();
    let direct = kira_gazeqc::analyzer::analyze(
        ctx.recording().unwrap(),
        &PipelineConfig::default(),
        &DiseaseSelection::all(),
    )
    .unwrap();
    assert_eq!(from_ctx, direct);
}
