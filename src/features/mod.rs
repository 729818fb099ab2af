//! Every key is always present. When the events a feature is computed from
//! are absent (no saccades, no fixations, no pupil trace) the feature takes
//! the sentinel 0.0, never NaN.

pub mod events;
pub mod signal;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::preprocess::ProcessedData;

macro_rules! feature_vector {
    ($($name:ident),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        pub struct FeatureVector {
            $(pub $name: f64,)+
        }

        impl FeatureVector {
            pub const KEYS: &'static [&'static str] = &[$(stringify!($name)),+];

            pub fn get(&self, key: &str) -> Option<f64> {
                match key {
                    $(stringify!($name) => Some(self.$name),)+
                    _ => None,
                }
            }

            pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
                [$((stringify!($name), self.$name)),+].into_iter()
            }
        }
    };
}

feature_vector! {
    saccade_count,
    saccade_rate,
    mean_saccade_amplitude,
    std_saccade_amplitude,
    mean_saccade_velocity,
    std_saccade_velocity,
    peak_saccade_velocity,
    mean_saccade_duration,
    std_saccade_duration,
    hypometric_saccade_ratio,
    fixation_count,
    fixation_rate,
    mean_fixation_duration,
    std_fixation_duration,
    total_fixation_time,
    fixation_dispersion,
    pursuit_count,
    total_pursuit_time,
    mean_pursuit_velocity,
    x_range,
    y_range,
    x_std,
    y_std,
    coverage_area,
    spatial_dispersion,
    mean_pupil_size,
    std_pupil_size,
    pupil_size_variability,
    mean_velocity,
    std_velocity,
    max_velocity,
    mean_acceleration,
    std_acceleration,
    max_acceleration,
}

impl FeatureVector {
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

pub fn extract(processed: &ProcessedData, config: &PipelineConfig) -> FeatureVector {
    let mut features = FeatureVector::default();
    let duration_s = processed.duration_ms() / 1000.0;
    events::saccade_features(
        processed,
        duration_s,
        config.hypometric_ratio,
        &mut features,
    );
    events::fixation_features(processed, duration_s, &mut features);
    events::pursuit_features(processed, &mut features);
    signal::spatial_features(processed, &mut features);
    signal::pupil_features(processed, &mut features);
    signal::temporal_features(processed, &mut features);
    features
}
