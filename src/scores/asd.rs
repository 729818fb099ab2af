use crate::scores::Disease;
use crate::scores::risk::{Rule, RuleTable, has_fixations, has_saccades};

const FIXATION_STD_MS: f64 = 200.0;
const SPATIAL_STD_PX: f64 = 150.0;
const FAST_SACCADE_DEG_S: f64 = 500.0;
const HIGH_SACCADE_RATE_HZ: f64 = 4.0;

pub static RULES: RuleTable = RuleTable {
    disease: Disease::Asd,
    rules: &[
        Rule {
            name: "variable_fixation_duration",
            threshold: "std_fixation_duration > 200 ms",
            weight: 0.3,
            indicator: "High fixation duration variability detected",
            recommendation: "Compare fixation patterns on social and non-social stimuli",
            predicate: |f| has_fixations(f) && f.std_fixation_duration > FIXATION_STD_MS,
        },
        Rule {
            name: "atypical_spatial_attention",
            threshold: "x_std > 150 px or y_std > 150 px",
            weight: 0.3,
            indicator: "Atypical spatial attention patterns detected",
            recommendation: "Review scan paths for peripheral fixation preference",
            predicate: |f| f.x_std > SPATIAL_STD_PX || f.y_std > SPATIAL_STD_PX,
        },
        Rule {
            name: "elevated_saccade_velocity",
            threshold: "mean_saccade_velocity > 500 deg/s",
            weight: 0.2,
            indicator: "Elevated saccade velocity detected",
            recommendation: "Verify saccade metrics with a calibrated prosaccade task",
            predicate: |f| has_saccades(f) && f.mean_saccade_velocity > FAST_SACCADE_DEG_S,
        },
        Rule {
            name: "elevated_saccade_rate",
            threshold: "saccade_rate > 4 /s",
            weight: 0.2,
            indicator: "Elevated saccade rate detected",
            recommendation: "Observe attention shifting during structured play",
            predicate: |f| has_saccades(f) && f.saccade_rate > HIGH_SACCADE_RATE_HZ,
        },
    ],
    moderate_recommendations: &["Consider developmental screening"],
    high_recommendations: &[
        "Recommend comprehensive ASD assessment",
        "Consider social interaction evaluation",
    ],
};
