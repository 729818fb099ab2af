pub mod events;
pub mod filter;
pub mod kinematics;
pub mod segment;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PipelineConfig;
use crate::error::AnalysisError;
use crate::input::Recording;

pub use events::{EventKind, EyeMovementEvent, unclassified_samples};
pub use filter::FilterKind;
pub use kinematics::Kinematics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventCounts {
    pub fixations: usize,
    pub saccades: usize,
    pub smooth_pursuits: usize,
    pub unclassified_samples: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedData {
    pub timestamps: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub pupil: Option<Vec<f64>>,
    pub sampling_rate: f64,
    pub filter: FilterKind,
    pub kinematics: Kinematics,
    pub events: Vec<EyeMovementEvent>,
    pub warnings: Vec<String>,
}

impl ProcessedData {
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

    pub fn saccades(&self) -> impl Iterator<Item = &EyeMovementEvent> {
        self.events.iter().filter(|e| e.is_saccade())
    }

    pub fn fixations(&self) -> impl Iterator<Item = &EyeMovementEvent> {
        self.events.iter().filter(|e| e.is_fixation())
    }

    pub fn smooth_pursuits(&self) -> impl Iterator<Item = &EyeMovementEvent> {
        self.events.iter().filter(|e| e.is_smooth_pursuit())
    }

    pub fn unclassified_samples(&self) -> usize {
        unclassified_samples(&self.events, self.len())
    }

    pub fn event_counts(&self) -> EventCounts {
        EventCounts {
            fixations: self.fixations().count(),
            saccades: self.saccades().count(),
            smooth_pursuits: self.smooth_pursuits().count(),
            unclassified_samples: self.unclassified_samples(),
        }
    }
}

pub fn process(
    recording: &Recording,
    config: &PipelineConfig,
) -> Result<ProcessedData, AnalysisError> {
    config.validate()?;
    recording.validate()?;

    let (x, filter) = filter::smooth(&recording.x_positions, config)?;
    let (y, _) = filter::smooth(&recording.y_positions, config)?;
    debug!(?filter, samples = x.len(), "positions_smoothed");

    let nominal_dt_ms = recording.nominal_dt_ms();
    let kinematics = kinematics::compute(
        &recording.timestamps,
        &x,
        &y,
        config.pixels_per_degree,
        nominal_dt_ms,
    )?;

    let events = segment::segment(
        &segment::Trace {
            timestamps: &recording.timestamps,
            x: &x,
            y: &y,
            kinematics: &kinematics,
            nominal_dt_ms,
        },
        config,
    );

    let mut warnings = Vec::new();
    if !events.iter().any(|e| e.is_saccade()) {
        warnings.push("no saccades detected; saccade features set to 0".to_string());
    }
    if !events.iter().any(|e| e.is_fixation()) {
        warnings.push("no fixations detected; fixation features set to 0".to_string());
    }
    debug!(
        events = events.len(),
        unclassified = unclassified_samples(&events, x.len()),
        "events_segmented"
    );

    Ok(ProcessedData {
        timestamps: recording.timestamps.clone(),
        x,
        y,
        pupil: recording.pupil_sizes.clone(),
        sampling_rate: recording.sampling_rate,
        filter,
        kinematics,
        events,
        warnings,
    })
}
