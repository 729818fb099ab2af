use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    Fixation {
        centroid_x: f64,
        centroid_y: f64,
        /// `(max x - min x) + (max y - min y)` over the fixation, pixels.
        dispersion: f64,
    },
    Saccade {
        amplitude_deg: f64,
        peak_velocity_deg_s: f64,
    },
    SmoothPursuit {
        mean_velocity_deg_s: f64,
    },
}

/// A classified, contiguous sample range `[start_index, end_index)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyeMovementEvent {
    pub start_index: usize,
    pub end_index: usize,
    pub start_ms: f64,
    pub duration_ms: f64,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl EyeMovementEvent {
    pub fn label(&self) -> &'static str {
        match self.kind {
            EventKind::Fixation { .. } => "fixation",
            EventKind::Saccade { .. } => "saccade",
            EventKind::SmoothPursuit { .. } => "smooth_pursuit",
        }
    }

    pub fn is_fixation(&self) -> bool {
        matches!(self.kind, EventKind::Fixation { .. })
    }

    pub fn is_saccade(&self) -> bool {
        matches!(self.kind, EventKind::Saccade { .. })
    }

    pub fn is_smooth_pursuit(&self) -> bool {
        matches!(self.kind, EventKind::SmoothPursuit { .. })
    }

    pub fn sample_count(&self) -> usize {
        self.end_index - self.start_index
    }
}

pub fn unclassified_samples(events: &[EyeMovementEvent], n_samples: usize) -> usize {
    let covered: usize = events.iter().map(|e| e.sample_count()).sum();
    n_samples.saturating_sub(covered)
}
