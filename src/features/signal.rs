use crate::features::FeatureVector;
use crate::math::stats::{coefficient_of_variation, max, mean, range, std_dev, variance};
use crate::preprocess::ProcessedData;

pub fn spatial_features(processed: &ProcessedData, out: &mut FeatureVector) {
    out.x_range = range(&processed.x);
    out.y_range = range(&processed.y);
    out.x_std = std_dev(&processed.x);
    out.y_std = std_dev(&processed.y);
    out.coverage_area = out.x_range * out.y_range;
    out.spatial_dispersion = variance(&processed.x) + variance(&processed.y);
}

pub fn pupil_features(processed: &ProcessedData, out: &mut FeatureVector) {
    let Some(pupil) = &processed.pupil else {
        return;
    };
    let valid: Vec<f64> = pupil.iter().copied().filter(|v| v.is_finite()).collect();
    if valid.is_empty() {
        return;
    }
    out.mean_pupil_size = mean(&valid);
    out.std_pupil_size = std_dev(&valid);
    out.pupil_size_variability = coefficient_of_variation(&valid);
}

pub fn temporal_features(processed: &ProcessedData, out: &mut FeatureVector) {
    let velocity = &processed.kinematics.velocity;
    let acceleration = &processed.kinematics.acceleration;
    let abs_acceleration: Vec<f64> = acceleration.iter().map(|a| a.abs()).collect();

    out.mean_velocity = mean(velocity);
    out.std_velocity = std_dev(velocity);
    out.max_velocity = max(velocity);
    out.mean_acceleration = mean(&abs_acceleration);
    out.std_acceleration = std_dev(acceleration);
    out.max_acceleration = max(&abs_acceleration);
}
