use kira_gazeqc::features::FeatureVector;
use kira_gazeqc::scores::risk::{detect, evaluate};
use kira_gazeqc::scores::{Disease, RiskLevel};

fn typical() -> FeatureVector {
    FeatureVector {
        saccade_count: 12.0,
        saccade_rate: 3.0,
        mean_saccade_amplitude: 5.0,
        std_saccade_amplitude: 1.0,
        mean_saccade_velocity: 400.0,
        std_velocity: 50.0,
        hypometric_saccade_ratio: 0.1,
        fixation_count: 10.0,
        mean_fixation_duration: 250.0,
        std_fixation_duration: 80.0,
        x_std: 60.0,
        y_std: 40.0,
        coverage_area: 30_000.0,
        spatial_dispersion: 5_200.0,
        ..FeatureVector::default()
    }
}

#[test]
fn typical_profile_is_low_everywhere() {
    let fv = typical();
    for disease in Disease::ALL {
        let r = detect(disease, &fv);
        assert_eq!(r.risk_score, 0.0, "{}", disease);
        assert_eq!(r.risk_level, RiskLevel::Low);
        assert!(r.indicators.is_empty());
        assert!(r.recommendations.is_empty());
        assert_eq!(r.rule_evaluations.len(), 4);
    }
}

#[test]
fn slow_saccades_fire_parkinsons_velocity_rule() {
    let fv = FeatureVector {
        mean_saccade_velocity: 250.0,
        ..typical()
    };
    let r = detect(Disease::Parkinsons, &fv);
    assert_eq!(r.indicators, vec!["Reduced saccade velocity detected"]);
    assert!((r.risk_score - 0.3).abs() < 1e-12);
    assert_eq!(r.risk_level, RiskLevel::Moderate);
    assert!(
        r.recommendations
            .iter()
            .any(|s| s == "Consider neurological consultation")
    );
    let rule = &r.rule_evaluations[0];
    assert_eq!(rule.name, "reduced_saccade_velocity");
    assert!(rule.fired);
    assert_eq!(rule.weight, 0.3);
}

#[test]
fn every_parkinsons_rule_saturates_at_one() {
    let fv = FeatureVector {
        mean_saccade_velocity: 200.0,
        hypometric_saccade_ratio: 0.5,
        mean_fixation_duration: 400.0,
        saccade_rate: 1.0,
        ..typical()
    };
    let r = detect(Disease::Parkinsons, &fv);
    assert!((r.risk_score - 1.0).abs() < 1e-12);
    assert_eq!(r.risk_level, RiskLevel::High);
    assert_eq!(r.indicators.len(), 4);
    let tail: Vec<&str> = r
        .recommendations
        .iter()
        .rev()
        .take(2)
        .map(|s| s.as_str())
        .collect();
    assert_eq!(
        tail,
        vec![
            "Monitor motor symptoms",
            "Recommend comprehensive neurological assessment"
        ]
    );
}

#[test]
fn zero_saccades_are_not_reduced_saccades() {
    let fv = FeatureVector {
        saccade_count: 0.0,
        saccade_rate: 0.0,
        mean_saccade_velocity: 0.0,
        mean_saccade_amplitude: 0.0,
        std_saccade_amplitude: 0.0,
        hypometric_saccade_ratio: 0.0,
        ..typical()
    };
    let pd = detect(Disease::Parkinsons, &fv);
    assert!(!pd.indicators.iter().any(|i| i.contains("saccade")));
    let ad = detect(Disease::Alzheimers, &fv);
    assert!(!ad.indicators.iter().any(|i| i.contains("saccade")));
}

#[test]
fn alzheimers_rules() {
    let fv = FeatureVector {
        mean_fixation_duration: 400.0,
        coverage_area: 5_000.0,
        std_saccade_amplitude: 4.0,
        saccade_rate: 1.0,
        ..typical()
    };
    let r = detect(Disease::Alzheimers, &fv);
    assert_eq!(
        r.indicators,
        vec![
            "Significantly prolonged fixations detected",
            "Reduced visual exploration detected",
            "High saccade variability detected",
            "Significantly reduced saccade rate",
        ]
    );
    assert_eq!(r.risk_level, RiskLevel::High);
}

#[test]
fn asd_spatial_rule_uses_either_axis() {
    let fv = FeatureVector {
        y_std: 180.0,
        ..typical()
    };
    let r = detect(Disease::Asd, &fv);
    assert_eq!(r.indicators, vec!["Atypical spatial attention patterns detected"]);
    assert!((r.risk_score - 0.3).abs() < 1e-12);
}

#[test]
fn adhd_rules() {
    let fv = FeatureVector {
        mean_fixation_duration: 120.0,
        saccade_rate: 5.0,
        ..typical()
    };
    let r = detect(Disease::Adhd, &fv);
    assert_eq!(
        r.indicators,
        vec![
            "Significantly shortened fixations detected",
            "Elevated saccade rate detected"
        ]
    );
    assert!((r.risk_score - 0.6).abs() < 1e-12);
    assert_eq!(r.risk_level, RiskLevel::High);
}

#[test]
fn adhd_dispersion_rule_reads_variance_not_bounding_box() {
    // A purely horizontal scan has no bounding-box area but wide variance.
    let horizontal = FeatureVector {
        spatial_dispersion: 160_000.0,
        coverage_area: 0.0,
        ..typical()
    };
    let r = detect(Disease::Adhd, &horizontal);
    assert_eq!(r.indicators, vec!["High spatial dispersion detected"]);
    assert!((r.risk_score - 0.2).abs() < 1e-12);
    let rule = r
        .rule_evaluations
        .iter()
        .find(|e| e.name == "high_spatial_dispersion")
        .unwrap();
    assert!(rule.fired);
    assert_eq!(rule.threshold, "spatial_dispersion > 50000 px^2");

    let wide_box = FeatureVector {
        spatial_dispersion: 100.0,
        coverage_area: 60_000.0,
        ..typical()
    };
    let r = detect(Disease::Adhd, &wide_box);
    assert!(r.indicators.is_empty());
    assert_eq!(r.risk_score, 0.0);
}

#[test]
fn rule_tables_are_well_formed() {
    for disease in Disease::ALL {
        let table = disease.rule_table();
        assert_eq!(table.disease, disease);
        let total: f64 = table.rules.iter().map(|r| r.weight).sum();
        assert!((total - 1.0).abs() < 1e-12, "{}", disease);
        let r = evaluate(table, &FeatureVector::default());
        assert!(r.risk_score >= 0.0 && r.risk_score <= 1.0);
    }
}

#[test]
fn level_cut_points() {
    assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(0.29), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(0.3), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(0.59), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(0.6), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(1.0), RiskLevel::High);
}
