//! Velocity-threshold event segmentation.
//!
//! Supra-threshold runs become saccades (peak |acceleration| above the
//! acceleration threshold) or smooth pursuit (below it). Runs shorter than
//! the minimum saccade duration are folded back into the surrounding
//! fixation region. What remains between movement events is a fixation when
//! long enough, otherwise an unclassified gap.

use std::ops::Range;

use crate::config::PipelineConfig;
use crate::math::stats::{max, mean, range};
use crate::preprocess::events::{EventKind, EyeMovementEvent};
use crate::preprocess::kinematics::Kinematics;

pub struct Trace<'a> {
    pub timestamps: &'a [f64],
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub kinematics: &'a Kinematics,
    pub nominal_dt_ms: f64,
}

impl Trace<'_> {
    fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Duration of `[start, end)`; each sample owns one nominal period.
    fn span_ms(&self, range: &Range<usize>) -> f64 {
        self.timestamps[range.end - 1] - self.timestamps[range.start] + self.nominal_dt_ms
    }
}

/// Candidate movement runs: start at the first sample above `threshold`,
/// close once `exit_samples` consecutive samples fall back to or below it.
/// The returned range ends one past the last supra-threshold sample.
pub fn detect_runs(velocity: &[f64], threshold: f64, exit_samples: usize) -> Vec<Range<usize>> {
    let n = velocity.len();
    let exit_samples = exit_samples.max(1);
    let mut runs = Vec::new();
    let mut i = 0;
    while i < n {
        if velocity[i] <= threshold {
            i += 1;
            continue;
        }
        let start = i;
        let mut last_above = i;
        let mut below = 0;
        let mut j = i + 1;
        while j < n {
            if velocity[j] > threshold {
                last_above = j;
                below = 0;
            } else {
                below += 1;
                if below >= exit_samples {
                    break;
                }
            }
            j += 1;
        }
        runs.push(start..last_above + 1);
        i = last_above + 1;
    }
    runs
}

pub fn segment(trace: &Trace<'_>, config: &PipelineConfig) -> Vec<EyeMovementEvent> {
    let n = trace.len();
    let runs = detect_runs(
        &trace.kinematics.velocity,
        config.velocity_threshold_deg_s,
        config.saccade_exit_samples,
    );

    let movements: Vec<EyeMovementEvent> = runs
        .into_iter()
        .filter(|run| trace.span_ms(run) >= config.saccade_min_duration_ms)
        .map(|run| movement_event(trace, run, config))
        .collect();

    let mut events = Vec::with_capacity(movements.len() * 2 + 1);
    let mut cursor = 0;
    for movement in movements {
        if movement.start_index > cursor {
            events.extend(fixation_event(trace, cursor..movement.start_index, config));
        }
        cursor = movement.end_index;
        events.push(movement);
    }
    if cursor < n {
        events.extend(fixation_event(trace, cursor..n, config));
    }
    events
}

fn movement_event(
    trace: &Trace<'_>,
    run: Range<usize>,
    config: &PipelineConfig,
) -> EyeMovementEvent {
    let velocity = &trace.kinematics.velocity[run.clone()];
    let peak_acceleration = trace.kinematics.acceleration[run.clone()]
        .iter()
        .fold(0.0f64, |acc, a| acc.max(a.abs()));

    let kind = if peak_acceleration > config.acceleration_threshold_deg_s2 {
        let last = run.end - 1;
        let dx = trace.x[last] - trace.x[run.start];
        let dy = trace.y[last] - trace.y[run.start];
        EventKind::Saccade {
            amplitude_deg: dx.hypot(dy) / config.pixels_per_degree,
            peak_velocity_deg_s: max(velocity),
        }
    } else {
        EventKind::SmoothPursuit {
            mean_velocity_deg_s: mean(velocity),
        }
    };

    EyeMovementEvent {
        start_index: run.start,
        end_index: run.end,
        start_ms: trace.timestamps[run.start],
        duration_ms: trace.span_ms(&run),
        kind,
    }
}

fn fixation_event(
    trace: &Trace<'_>,
    region: Range<usize>,
    config: &PipelineConfig,
) -> Option<EyeMovementEvent> {
    let duration_ms = trace.span_ms(&region);
    if duration_ms < config.fixation_min_duration_ms {
        return None;
    }
    let xs = &trace.x[region.clone()];
    let ys = &trace.y[region.clone()];
    Some(EyeMovementEvent {
        start_index: region.start,
        end_index: region.end,
        start_ms: trace.timestamps[region.start],
        duration_ms,
        kind: EventKind::Fixation {
            centroid_x: mean(xs),
            centroid_y: mean(ys),
            dispersion: range(xs) + range(ys),
        },
    })
}
