use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::input::Recording;

const START_X: f64 = 500.0;
const START_Y: f64 = 400.0;
const X_BOUNDS: (f64, f64) = (100.0, 900.0);
const Y_BOUNDS: (f64, f64) = (100.0, 700.0);
const MAX_SAMPLES: f64 = 1e8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthSpec {
    pub duration_ms: f64,
    pub sampling_rate: f64,
    pub noise_std: f64,
    pub saccade_probability: f64,
    pub jump_std: f64,
    pub with_pupil: bool,
    pub seed: u64,
    pub subject_id: Option<String>,
    pub task_type: Option<String>,
}

impl Default for SynthSpec {
    fn default() -> Self {
        Self {
            duration_ms: 5000.0,
            sampling_rate: 1000.0,
            noise_std: 2.0,
            saccade_probability: 0.01,
            jump_std: 50.0,
            with_pupil: true,
            seed: 42,
            subject_id: None,
            task_type: None,
        }
    }
}

pub fn generate(spec: &SynthSpec) -> Result<Recording, AnalysisError> {
    if !spec.duration_ms.is_finite() || spec.duration_ms <= 0.0 {
        return Err(AnalysisError::invalid("duration_ms must be positive"));
    }
    if !spec.sampling_rate.is_finite() || spec.sampling_rate <= 0.0 {
        return Err(AnalysisError::invalid("sampling_rate must be positive"));
    }
    if !(0.0..=1.0).contains(&spec.saccade_probability) {
        return Err(AnalysisError::invalid(
            "saccade_probability must be within [0, 1]",
        ));
    }
    let noise = Normal::new(0.0, spec.noise_std)
        .map_err(|e| AnalysisError::invalid(format!("noise_std: {}", e)))?;
    let jump = Normal::new(0.0, spec.jump_std)
        .map_err(|e| AnalysisError::invalid(format!("jump_std: {}", e)))?;
    let pupil_noise = Normal::new(0.0, 0.1)
        .map_err(|e| AnalysisError::invalid(format!("pupil noise: {}", e)))?;

    let samples = spec.duration_ms * spec.sampling_rate / 1000.0;
    if samples > MAX_SAMPLES {
        return Err(AnalysisError::invalid(format!(
            "{} ms at {} Hz exceeds {} samples",
            spec.duration_ms, spec.sampling_rate, MAX_SAMPLES
        )));
    }
    let n = samples as usize;
    if n < 2 {
        return Err(AnalysisError::invalid(format!(
            "{} ms at {} Hz yields fewer than 2 samples",
            spec.duration_ms, spec.sampling_rate
        )));
    }
    let step = spec.duration_ms / (n - 1) as f64;
    let timestamps: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();

    let mut rng = ChaCha8Rng::seed_from_u64(spec.seed);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let (mut cx, mut cy) = (START_X, START_Y);
    for _ in 0..n {
        x.push(cx + noise.sample(&mut rng));
        y.push(cy + noise.sample(&mut rng));
        if rng.gen_bool(spec.saccade_probability) {
            cx = (cx + jump.sample(&mut rng)).clamp(X_BOUNDS.0, X_BOUNDS.1);
            cy = (cy + jump.sample(&mut rng)).clamp(Y_BOUNDS.0, Y_BOUNDS.1);
        }
    }

    let pupil_sizes = if spec.with_pupil {
        Some(
            timestamps
                .iter()
                .map(|t| {
                    3.0 + 0.5 * (2.0 * std::f64::consts::PI * t / 1000.0).sin()
                        + pupil_noise.sample(&mut rng)
                })
                .collect(),
        )
    } else {
        None
    };

    let mut recording = Recording::new(timestamps, x, y);
    recording.pupil_sizes = pupil_sizes;
    recording.sampling_rate = spec.sampling_rate;
    recording.subject_id = spec.subject_id.clone();
    recording.task_type = spec.task_type.clone();
    Ok(recording)
}
