use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub velocity_threshold_deg_s: f64,
    pub acceleration_threshold_deg_s2: f64,
    pub fixation_min_duration_ms: f64,
    pub saccade_min_duration_ms: f64,
    /// Consecutive sub-threshold samples needed to close a saccade run.
    pub saccade_exit_samples: usize,
    pub savgol_window: usize,
    pub savgol_polyorder: usize,
    pub median_kernel: usize,
    pub pixels_per_degree: f64,
    pub hypometric_ratio: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            velocity_threshold_deg_s: 30.0,
            acceleration_threshold_deg_s2: 8000.0,
            fixation_min_duration_ms: 100.0,
            saccade_min_duration_ms: 10.0,
            saccade_exit_samples: 2,
            savgol_window: 11,
            savgol_polyorder: 2,
            median_kernel: 5,
            pixels_per_degree: 35.0,
            hypometric_ratio: 0.5,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        positive("velocity_threshold_deg_s", self.velocity_threshold_deg_s)?;
        positive(
            "acceleration_threshold_deg_s2",
            self.acceleration_threshold_deg_s2,
        )?;
        positive("fixation_min_duration_ms", self.fixation_min_duration_ms)?;
        positive("saccade_min_duration_ms", self.saccade_min_duration_ms)?;
        positive("pixels_per_degree", self.pixels_per_degree)?;
        positive("hypometric_ratio", self.hypometric_ratio)?;

        if self.saccade_exit_samples == 0 {
            return Err(AnalysisError::config("saccade_exit_samples must be >= 1"));
        }
        if self.savgol_window < 3 || self.savgol_window % 2 == 0 {
            return Err(AnalysisError::config(format!(
                "savgol_window must be odd and >= 3 (got {})",
                self.savgol_window
            )));
        }
        if self.savgol_polyorder >= self.savgol_window {
            return Err(AnalysisError::config(format!(
                "savgol_polyorder ({}) must be below savgol_window ({})",
                self.savgol_polyorder, self.savgol_window
            )));
        }
        if self.median_kernel == 0 || self.median_kernel % 2 == 0 {
            return Err(AnalysisError::config(format!(
                "median_kernel must be odd and >= 1 (got {})",
                self.median_kernel
            )));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = crate::io::open_maybe_gz(path)
            .with_context(|| format!("failed to open config {}", path.display()))?;
        let config: Self = serde_json::from_reader(reader)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }
}

fn positive(name: &str, value: f64) -> Result<(), AnalysisError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AnalysisError::config(format!(
            "{} must be a positive finite number (got {})",
            name, value
        )));
    }
    Ok(())
}
