use crate::scores::Disease;
use crate::scores::risk::{Rule, RuleTable, has_fixations, has_saccades};

const SLOW_SACCADE_DEG_S: f64 = 300.0;
const HYPOMETRIC_FRACTION: f64 = 0.3;
const PROLONGED_FIXATION_MS: f64 = 300.0;
const LOW_SACCADE_RATE_HZ: f64 = 2.0;

pub static RULES: RuleTable = RuleTable {
    disease: Disease::Parkinsons,
    rules: &[
        Rule {
            name: "reduced_saccade_velocity",
            threshold: "mean_saccade_velocity < 300 deg/s",
            weight: 0.3,
            indicator: "Reduced saccade velocity detected",
            recommendation: "Evaluate saccadic peak velocity with a visually guided saccade task",
            predicate: |f| has_saccades(f) && f.mean_saccade_velocity < SLOW_SACCADE_DEG_S,
        },
        Rule {
            name: "hypometric_saccades",
            threshold: "hypometric_saccade_ratio > 0.3",
            weight: 0.3,
            indicator: "Hypometric saccades detected",
            recommendation: "Assess saccadic accuracy for target undershoot",
            predicate: |f| has_saccades(f) && f.hypometric_saccade_ratio > HYPOMETRIC_FRACTION,
        },
        Rule {
            name: "prolonged_fixations",
            threshold: "mean_fixation_duration > 300 ms",
            weight: 0.2,
            indicator: "Prolonged fixations detected",
            recommendation: "Review fixation stability during the neurological examination",
            predicate: |f| has_fixations(f) && f.mean_fixation_duration > PROLONGED_FIXATION_MS,
        },
        Rule {
            name: "reduced_saccade_rate",
            threshold: "saccade_rate < 2 /s",
            weight: 0.2,
            indicator: "Reduced saccade rate detected",
            recommendation: "Repeat the recording with an active visual search task",
            predicate: |f| has_saccades(f) && f.saccade_rate < LOW_SACCADE_RATE_HZ,
        },
    ],
    moderate_recommendations: &["Consider neurological consultation"],
    high_recommendations: &[
        "Recommend comprehensive neurological assessment",
        "Monitor motor symptoms",
    ],
};
