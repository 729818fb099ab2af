use crate::features::FeatureVector;
use crate::math::stats::{max, mean, median, std_dev};
use crate::preprocess::{EventKind, ProcessedData};

pub fn saccade_features(
    processed: &ProcessedData,
    duration_s: f64,
    hypometric_ratio: f64,
    out: &mut FeatureVector,
) {
    let mut amplitudes = Vec::new();
    let mut velocities = Vec::new();
    let mut durations = Vec::new();
    for event in processed.saccades() {
        if let EventKind::Saccade {
            amplitude_deg,
            peak_velocity_deg_s,
        } = event.kind
        {
            amplitudes.push(amplitude_deg);
            velocities.push(peak_velocity_deg_s);
            durations.push(event.duration_ms);
        }
    }
    if amplitudes.is_empty() {
        return;
    }

    out.saccade_count = amplitudes.len() as f64;
    out.saccade_rate = rate(amplitudes.len(), duration_s);
    out.mean_saccade_amplitude = mean(&amplitudes);
    out.std_saccade_amplitude = std_dev(&amplitudes);
    out.mean_saccade_velocity = mean(&velocities);
    out.std_saccade_velocity = std_dev(&velocities);
    out.peak_saccade_velocity = max(&velocities);
    out.mean_saccade_duration = mean(&durations);
    out.std_saccade_duration = std_dev(&durations);
    out.hypometric_saccade_ratio = hypometric_fraction(&amplitudes, hypometric_ratio);
}

pub fn fixation_features(processed: &ProcessedData, duration_s: f64, out: &mut FeatureVector) {
    let mut durations = Vec::new();
    let mut centroids = Vec::new();
    for event in processed.fixations() {
        if let EventKind::Fixation {
            centroid_x,
            centroid_y,
            ..
        } = event.kind
        {
            durations.push(event.duration_ms);
            centroids.push((centroid_x, centroid_y));
        }
    }
    if durations.is_empty() {
        return;
    }

    let gx = mean(&processed.x);
    let gy = mean(&processed.y);
    let distances: Vec<f64> = centroids
        .iter()
        .map(|(cx, cy)| (cx - gx).hypot(cy - gy))
        .collect();

    out.fixation_count = durations.len() as f64;
    out.fixation_rate = rate(durations.len(), duration_s);
    out.mean_fixation_duration = mean(&durations);
    out.std_fixation_duration = std_dev(&durations);
    out.total_fixation_time = durations.iter().sum();
    out.fixation_dispersion = mean(&distances);
}

pub fn pursuit_features(processed: &ProcessedData, out: &mut FeatureVector) {
    let mut durations = Vec::new();
    let mut velocities = Vec::new();
    for event in processed.smooth_pursuits() {
        if let EventKind::SmoothPursuit {
            mean_velocity_deg_s,
        } = event.kind
        {
            durations.push(event.duration_ms);
            velocities.push(mean_velocity_deg_s);
        }
    }
    out.pursuit_count = durations.len() as f64;
    out.total_pursuit_time = durations.iter().sum();
    out.mean_pursuit_velocity = mean(&velocities);
}

pub fn hypometric_fraction(amplitudes: &[f64], ratio: f64) -> f64 {
    if amplitudes.is_empty() {
        return 0.0;
    }
    let mut scratch = amplitudes.to_vec();
    let cutoff = median(&mut scratch) * ratio;
    let count = amplitudes.iter().filter(|&&a| a < cutoff).count();
    count as f64 / amplitudes.len() as f64
}

fn rate(count: usize, duration_s: f64) -> f64 {
    if duration_s > 0.0 {
        count as f64 / duration_s
    } else {
        0.0
    }
}
