use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AnalysisError;

pub const MIN_SAMPLES: usize = 100;
pub const MIN_DURATION_MS: f64 = 1000.0;

const DEFAULT_SAMPLING_RATE_HZ: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub timestamps: Vec<f64>,
    pub x_positions: Vec<f64>,
    pub y_positions: Vec<f64>,
    #[serde(
        default,
        deserialize_with = "nullable_samples",
        skip_serializing_if = "Option::is_none"
    )]
    pub pupil_sizes: Option<Vec<f64>>,
    #[serde(default = "default_sampling_rate", alias = "sampling_rate_hz")]
    pub sampling_rate: f64,
    #[serde(default)]
    pub subject_id: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub task_type: Option<String>,
}

impl Recording {
    pub fn new(timestamps: Vec<f64>, x_positions: Vec<f64>, y_positions: Vec<f64>) -> Self {
        Self {
            timestamps,
            x_positions,
            y_positions,
            pupil_sizes: None,
            sampling_rate: DEFAULT_SAMPLING_RATE_HZ,
            subject_id: None,
            session_id: None,
            task_type: None,
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn duration_ms(&self) -> f64 {
        match (self.timestamps.first(), self.timestamps.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    pub fn nominal_dt_ms(&self) -> f64 {
        1000.0 / self.sampling_rate
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        let n = self.timestamps.len();
        if n == 0 {
            return Err(AnalysisError::invalid("recording has no samples"));
        }
        if self.x_positions.len() != n || self.y_positions.len() != n {
            return Err(AnalysisError::invalid(format!(
                "timestamps ({}), x_positions ({}) and y_positions ({}) must have the same length",
                n,
                self.x_positions.len(),
                self.y_positions.len()
            )));
        }
        if let Some(pupil) = &self.pupil_sizes {
            if pupil.len() != n {
                return Err(AnalysisError::invalid(format!(
                    "pupil_sizes ({}) must have the same length as timestamps ({})",
                    pupil.len(),
                    n
                )));
            }
        }
        if !self.sampling_rate.is_finite() || self.sampling_rate <= 0.0 {
            return Err(AnalysisError::invalid(format!(
                "sampling_rate must be positive (got {})",
                self.sampling_rate
            )));
        }
        if let Some(i) = self.timestamps.iter().position(|t| !t.is_finite()) {
            return Err(AnalysisError::invalid(format!(
                "timestamp at index {} is not finite",
                i
            )));
        }
        if let Some(i) = self
            .x_positions
            .iter()
            .zip(&self.y_positions)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(AnalysisError::invalid(format!(
                "gaze position at index {} is not finite",
                i
            )));
        }
        if let Some(i) = self.timestamps.windows(2).position(|w| w[1] < w[0]) {
            return Err(AnalysisError::invalid(format!(
                "timestamps decrease at index {}",
                i + 1
            )));
        }
        if n < MIN_SAMPLES {
            return Err(AnalysisError::invalid(format!(
                "at least {} samples required (got {})",
                MIN_SAMPLES, n
            )));
        }
        let duration = self.duration_ms();
        if duration < MIN_DURATION_MS {
            return Err(AnalysisError::invalid(format!(
                "at least {} ms of data required (got {:.1} ms)",
                MIN_DURATION_MS, duration
            )));
        }
        Ok(())
    }
}

pub fn load_recording(path: &Path) -> Result<Recording> {
    let reader = crate::io::open_maybe_gz(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let recording: Recording = serde_json::from_reader(std::io::BufReader::new(reader))
        .with_context(|| format!("failed to parse recording {}", path.display()))?;
    Ok(recording)
}

pub fn label_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("input");
    let name = name.strip_suffix(".gz").unwrap_or(name);
    let name = name.strip_suffix(".json").unwrap_or(name);
    if name.is_empty() {
        "input".to_string()
    } else {
        name.to_string()
    }
}

fn default_sampling_rate() -> f64 {
    DEFAULT_SAMPLING_RATE_HZ
}

fn nullable_samples<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<f64>>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|values| values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()))
}
