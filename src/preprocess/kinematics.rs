use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub velocity: Vec<f64>,
    pub acceleration: Vec<f64>,
}

impl Kinematics {
    pub fn len(&self) -> usize {
        self.velocity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocity.is_empty()
    }
}

pub fn compute(
    timestamps: &[f64],
    x: &[f64],
    y: &[f64],
    pixels_per_degree: f64,
    nominal_dt_ms: f64,
) -> Result<Kinematics, AnalysisError> {
    let n = timestamps.len();
    if n < 2 {
        return Err(AnalysisError::invalid(format!(
            "kinematics need at least 2 samples (got {})",
            n
        )));
    }
    if x.len() != n || y.len() != n {
        return Err(AnalysisError::invalid(
            "position and timestamp lengths differ after filtering",
        ));
    }
    if !nominal_dt_ms.is_finite() || nominal_dt_ms <= 0.0 {
        return Err(AnalysisError::invalid("sampling rate must be positive"));
    }

    let vx = gradient(x, timestamps, nominal_dt_ms);
    let vy = gradient(y, timestamps, nominal_dt_ms);
    let velocity: Vec<f64> = vx
        .iter()
        .zip(&vy)
        .map(|(dx, dy)| dx.hypot(*dy) / pixels_per_degree)
        .collect();
    let acceleration = gradient(&velocity, timestamps, nominal_dt_ms);

    Ok(Kinematics {
        velocity,
        acceleration,
    })
}

pub fn gradient(values: &[f64], timestamps: &[f64], nominal_dt_ms: f64) -> Vec<f64> {
    let n = values.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let (a, b) = if i == 0 {
            (0, 1.min(n - 1))
        } else if i == n - 1 {
            (n - 2, n - 1)
        } else {
            (i - 1, i + 1)
        };
        if a == b {
            out.push(0.0);
            continue;
        }
        let mut dt_ms = timestamps[b] - timestamps[a];
        if dt_ms <= 0.0 {
            dt_ms = nominal_dt_ms * (b - a) as f64;
        }
        out.push((values[b] - values[a]) / (dt_ms / 1000.0));
    }
    out
}
