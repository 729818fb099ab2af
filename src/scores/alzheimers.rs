use crate::scores::Disease;
use crate::scores::risk::{Rule, RuleTable, has_fixations, has_saccades};

const PROLONGED_FIXATION_MS: f64 = 350.0;
const REDUCED_COVERAGE_PX2: f64 = 10_000.0;
const AMPLITUDE_CV_LIMIT: f64 = 0.7;
const LOW_SACCADE_RATE_HZ: f64 = 1.5;

pub static RULES: RuleTable = RuleTable {
    disease: Disease::Alzheimers,
    rules: &[
        Rule {
            name: "prolonged_fixations",
            threshold: "mean_fixation_duration > 350 ms",
            weight: 0.3,
            indicator: "Significantly prolonged fixations detected",
            recommendation: "Screen processing speed with a timed visual search task",
            predicate: |f| has_fixations(f) && f.mean_fixation_duration > PROLONGED_FIXATION_MS,
        },
        Rule {
            name: "reduced_visual_exploration",
            threshold: "coverage_area < 10000 px^2",
            weight: 0.3,
            indicator: "Reduced visual exploration detected",
            recommendation: "Assess visual exploration with a free-viewing scene task",
            predicate: |f| f.coverage_area < REDUCED_COVERAGE_PX2,
        },
        Rule {
            name: "high_saccade_variability",
            threshold: "std_saccade_amplitude > 0.7 * mean_saccade_amplitude",
            weight: 0.2,
            indicator: "High saccade variability detected",
            recommendation: "Check saccade amplitude consistency across repeated sessions",
            predicate: |f| {
                has_saccades(f)
                    && f.std_saccade_amplitude > f.mean_saccade_amplitude * AMPLITUDE_CV_LIMIT
            },
        },
        Rule {
            name: "reduced_saccade_rate",
            threshold: "saccade_rate < 1.5 /s",
            weight: 0.2,
            indicator: "Significantly reduced saccade rate",
            recommendation: "Repeat the recording with an active visual search task",
            predicate: |f| has_saccades(f) && f.saccade_rate < LOW_SACCADE_RATE_HZ,
        },
    ],
    moderate_recommendations: &["Consider cognitive assessment"],
    high_recommendations: &[
        "Recommend comprehensive neuropsychological evaluation",
        "Monitor cognitive function",
    ],
};
