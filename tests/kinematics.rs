use kira_gazeqc::error::AnalysisError;
use kira_gazeqc::preprocess::kinematics::{compute, gradient};

#[test]
fn constant_speed_in_degrees() {
    // 35 px/s at 35 px/deg is 1 deg/s.
    let t: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let x: Vec<f64> = t.iter().map(|ms| ms * 0.035).collect();
    let y = vec![0.0; 100];
    let k = compute(&t, &x, &y, 35.0, 1.0).unwrap();
    assert_eq!(k.len(), 100);
    for v in &k.velocity {
        assert!((v - 1.0).abs() < 1e-9);
    }
    for a in &k.acceleration {
        assert!(a.abs() < 1e-6);
    }
}

#[test]
fn edges_use_one_sided_differences() {
    let t = [0.0, 1.0, 2.0];
    let g = gradient(&[0.0, 1.0, 4.0], &t, 1.0);
    assert_eq!(g, vec![1000.0, 2000.0, 3000.0]);
}

#[test]
fn repeated_timestamp_uses_nominal_period() {
    let t = [0.0, 0.0, 1.0];
    let g = gradient(&[0.0, 1.0, 2.0], &t, 1.0);
    assert!(g.iter().all(|v| v.is_finite()));
    assert_eq!(g[0], 1000.0);
}

#[test]
fn single_sample_is_rejected() {
    assert!(matches!(
        compute(&[0.0], &[0.0], &[0.0], 35.0, 1.0),
        Err(AnalysisError::InvalidInput(_))
    ));
}
