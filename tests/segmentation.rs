use kira_gazeqc::config::PipelineConfig;
use kira_gazeqc::input::Recording;
use kira_gazeqc::preprocess::kinematics::Kinematics;
use kira_gazeqc::preprocess::segment::{Trace, detect_runs, segment};
use kira_gazeqc::preprocess::{self, EventKind, unclassified_samples};

fn ms(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

fn segment_velocity(velocity: Vec<f64>, acceleration: Vec<f64>) -> Vec<kira_gazeqc::preprocess::EyeMovementEvent> {
    let n = velocity.len();
    let t = ms(n);
    let x = vec![0.0; n];
    let y = vec![0.0; n];
    let kinematics = Kinematics {
        velocity,
        acceleration,
    };
    segment(
        &Trace {
            timestamps: &t,
            x: &x,
            y: &y,
            kinematics: &kinematics,
            nominal_dt_ms: 1.0,
        },
        &PipelineConfig::default(),
    )
}

#[test]
fn hysteresis_needs_two_quiet_samples() {
    let v = [0.0, 50.0, 50.0, 10.0, 50.0, 50.0, 0.0, 0.0, 50.0, 0.0, 0.0];
    assert_eq!(detect_runs(&v, 30.0, 2), vec![1..6, 8..9]);
    assert_eq!(detect_runs(&v, 30.0, 1), vec![1..3, 4..6, 8..9]);
}

#[test]
fn run_open_at_end_is_closed_at_last_sample() {
    assert_eq!(detect_runs(&[0.0, 50.0, 50.0], 30.0, 2), vec![1..3]);
}

#[test]
fn threshold_itself_is_not_movement() {
    assert!(detect_runs(&[30.0; 10], 30.0, 2).is_empty());
}

#[test]
fn flat_signal_is_one_fixation() {
    let n = 5000;
    let recording = Recording::new(ms(n), vec![512.0; n], vec![384.0; n]);
    let processed = preprocess::process(&recording, &PipelineConfig::default()).unwrap();
    assert_eq!(processed.events.len(), 1);
    let event = processed.events[0];
    assert_eq!((event.start_index, event.end_index), (0, n));
    assert!((event.duration_ms - 5000.0).abs() < 1e-9);
    match event.kind {
        EventKind::Fixation {
            centroid_x,
            centroid_y,
            dispersion,
        } => {
            assert!((centroid_x - 512.0).abs() < 1e-6);
            assert!((centroid_y - 384.0).abs() < 1e-6);
            assert!(dispersion < 1e-6);
        }
        other => panic!("expected fixation, got {:?}", other),
    }
    assert!(processed.warnings.iter().any(|w| w.contains("no saccades")));
}

#[test]
fn short_runs_merge_into_fixation() {
    let mut v = vec![0.0; 600];
    let a = vec![20_000.0; 600];
    for s in v.iter_mut().skip(300).take(5) {
        *s = 100.0;
    }
    let events = segment_velocity(v, a);
    assert_eq!(events.len(), 1);
    assert!(events[0].is_fixation());
    assert_eq!((events[0].start_index, events[0].end_index), (0, 600));
}

#[test]
fn acceleration_separates_saccade_from_pursuit() {
    let mut v = vec![0.0; 600];
    let mut a = vec![0.0; 600];
    for i in 200..230 {
        v[i] = 300.0;
        a[i] = 20_000.0;
    }
    for i in 400..450 {
        v[i] = 40.0;
        a[i] = 500.0;
    }
    let events = segment_velocity(v, a);
    let kinds: Vec<&str> = events.iter().map(|e| e.label()).collect();
    assert_eq!(
        kinds,
        vec!["fixation", "saccade", "fixation", "smooth_pursuit", "fixation"]
    );
    assert_eq!((events[1].start_index, events[1].end_index), (200, 230));
    assert!((events[1].duration_ms - 30.0).abs() < 1e-9);
    assert_eq!((events[3].start_index, events[3].end_index), (400, 450));
}

#[test]
fn short_gaps_stay_unclassified() {
    let mut v = vec![0.0; 400];
    let a = vec![20_000.0; 400];
    for i in (100..130).chain(180..210) {
        v[i] = 300.0;
    }
    let events = segment_velocity(v, a);
    // 130..180 is 50 ms, below the fixation minimum.
    let kinds: Vec<&str> = events.iter().map(|e| e.label()).collect();
    assert_eq!(kinds, vec!["fixation", "saccade", "saccade", "fixation"]);
    assert_eq!(unclassified_samples(&events, 400), 50);
}

#[test]
fn ramped_pursuit_is_not_a_saccade() {
    // 50 deg/s target with 100 ms velocity ramps at both ends.
    let n = 3000;
    let step = 50.0 * 35.0 / 1000.0;
    let mut x = Vec::with_capacity(n);
    let mut pos = 100.0;
    for i in 0..n {
        if (1000..2000).contains(&i) {
            let k = (i - 1000) as f64;
            let f = 1.0f64.min((k + 1.0) / 100.0).min((2000 - i) as f64 / 100.0);
            pos += step * f;
        }
        x.push(pos);
    }
    let recording = Recording::new(ms(n), x, vec![300.0; n]);
    let processed = preprocess::process(&recording, &PipelineConfig::default()).unwrap();
    let counts = processed.event_counts();
    assert_eq!(counts.saccades, 0);
    assert_eq!(counts.smooth_pursuits, 1);
    let pursuit = processed.smooth_pursuits().next().unwrap();
    match pursuit.kind {
        EventKind::SmoothPursuit {
            mean_velocity_deg_s,
        } => assert!(mean_velocity_deg_s > 30.0 && mean_velocity_deg_s < 55.0),
        _ => unreachable!(),
    }
}

#[test]
fn malformed_lengths_fail_before_processing() {
    let recording = Recording::new(ms(2000), vec![0.0; 1999], vec![0.0; 2000]);
    let err = preprocess::process(&recording, &PipelineConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        kira_gazeqc::error::AnalysisError::InvalidInput(_)
    ));
}
