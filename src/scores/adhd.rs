use crate::scores::Disease;
use crate::scores::risk::{Rule, RuleTable, has_fixations, has_saccades};

const SHORT_FIXATION_MS: f64 = 150.0;
const HIGH_SACCADE_RATE_HZ: f64 = 4.0;
const WIDE_DISPERSION_PX2: f64 = 50_000.0;
const VELOCITY_STD_DEG_S: f64 = 100.0;

pub static RULES: RuleTable = RuleTable {
    disease: Disease::Adhd,
    rules: &[
        Rule {
            name: "shortened_fixations",
            threshold: "mean_fixation_duration < 150 ms",
            weight: 0.3,
            indicator: "Significantly shortened fixations detected",
            recommendation: "Assess sustained attention with a fixation-hold task",
            predicate: |f| has_fixations(f) && f.mean_fixation_duration < SHORT_FIXATION_MS,
        },
        Rule {
            name: "elevated_saccade_rate",
            threshold: "saccade_rate > 4 /s",
            weight: 0.3,
            indicator: "Elevated saccade rate detected",
            recommendation: "Evaluate response inhibition with an antisaccade task",
            predicate: |f| has_saccades(f) && f.saccade_rate > HIGH_SACCADE_RATE_HZ,
        },
        Rule {
            name: "high_spatial_dispersion",
            threshold: "spatial_dispersion > 50000 px^2",
            weight: 0.2,
            indicator: "High spatial dispersion detected",
            recommendation: "Check for distractors in the recording environment",
            predicate: |f| f.spatial_dispersion > WIDE_DISPERSION_PX2,
        },
        Rule {
            name: "high_movement_variability",
            threshold: "std_velocity > 100 deg/s",
            weight: 0.2,
            indicator: "High movement variability detected",
            recommendation: "Repeat the recording after a rest period",
            predicate: |f| f.std_velocity > VELOCITY_STD_DEG_S,
        },
    ],
    moderate_recommendations: &["Consider attention assessment"],
    high_recommendations: &[
        "Recommend comprehensive ADHD evaluation",
        "Monitor attention and hyperactivity symptoms",
    ],
};
