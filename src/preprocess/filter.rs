//! Position smoothing: Savitzky-Golay with a median-filter fallback.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::error::AnalysisError;
use crate::math::stats::median;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterKind {
    SavitzkyGolay { window: usize, polyorder: usize },
    Median { kernel: usize },
}

pub fn smooth(
    values: &[f64],
    config: &PipelineConfig,
) -> Result<(Vec<f64>, FilterKind), AnalysisError> {
    let n = values.len();
    if config.savgol_window <= n {
        let out = savitzky_golay(values, config.savgol_window, config.savgol_polyorder)?;
        return Ok((
            out,
            FilterKind::SavitzkyGolay {
                window: config.savgol_window,
                polyorder: config.savgol_polyorder,
            },
        ));
    }
    if config.median_kernel > n {
        return Err(AnalysisError::config(format!(
            "filter window ({}) and median kernel ({}) both exceed the series length ({})",
            config.savgol_window, config.median_kernel, n
        )));
    }
    Ok((
        median_filter(values, config.median_kernel),
        FilterKind::Median {
            kernel: config.median_kernel,
        },
    ))
}

/// Least-squares polynomial smoothing over an odd window. The first and last
/// `window / 2` samples are taken from the fit of the first/last full window,
/// so the output has no phase shift.
pub fn savitzky_golay(
    values: &[f64],
    window: usize,
    polyorder: usize,
) -> Result<Vec<f64>, AnalysisError> {
    let n = values.len();
    if window % 2 == 0 || window < 3 || polyorder >= window || window > n {
        return Err(AnalysisError::config(format!(
            "invalid Savitzky-Golay window {} / order {} for {} samples",
            window, polyorder, n
        )));
    }
    let half = window / 2;
    let fit = SavgolFit::new(window, polyorder)?;
    let mut out = vec![0.0; n];

    let center = fit.weights(0.0);
    for i in half..(n - half) {
        out[i] = dot(&center, &values[i - half..=i + half]);
    }

    let head = &values[..window];
    let tail = &values[n - window..];
    for i in 0..half {
        let offset = i as f64 - half as f64;
        out[i] = dot(&fit.weights(offset), head);
        out[n - 1 - i] = dot(&fit.weights(-offset), tail);
    }
    Ok(out)
}

pub fn median_filter(values: &[f64], kernel: usize) -> Vec<f64> {
    let n = values.len();
    let half = kernel / 2;
    let mut scratch = Vec::with_capacity(kernel);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let lo = i.saturating_sub(half);
        let hi = (i + half + 1).min(n);
        scratch.clear();
        scratch.extend_from_slice(&values[lo..hi]);
        out.push(median(&mut scratch));
    }
    out
}

struct SavgolFit {
    design: DMatrix<f64>,
    normal_inv: DMatrix<f64>,
    polyorder: usize,
}

impl SavgolFit {
    fn new(window: usize, polyorder: usize) -> Result<Self, AnalysisError> {
        let half = (window / 2) as f64;
        let design = DMatrix::from_fn(window, polyorder + 1, |row, col| {
            (row as f64 - half).powi(col as i32)
        });
        let normal = design.transpose() * &design;
        let normal_inv = normal.try_inverse().ok_or_else(|| {
            AnalysisError::config(format!(
                "Savitzky-Golay normal matrix is singular (window {}, order {})",
                window, polyorder
            ))
        })?;
        Ok(Self {
            design,
            normal_inv,
            polyorder,
        })
    }

    fn weights(&self, offset: f64) -> Vec<f64> {
        let basis = DVector::from_fn(self.polyorder + 1, |j, _| offset.powi(j as i32));
        let h = &self.design * (&self.normal_inv * basis);
        h.iter().copied().collect()
    }
}

fn dot(weights: &[f64], values: &[f64]) -> f64 {
    weights.iter().zip(values).map(|(w, v)| w * v).sum()
}
