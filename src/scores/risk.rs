//! A rule's weight is added to the score when its predicate fires; the sum
//! is clamped to [0, 1].

use crate::features::FeatureVector;
use crate::scores::{Disease, DiseaseResult, RiskLevel, RuleEvaluation};

pub struct Rule {
    pub name: &'static str,
    pub threshold: &'static str,
    pub weight: f64,
    pub indicator: &'static str,
    pub recommendation: &'static str,
    pub predicate: fn(&FeatureVector) -> bool,
}

pub struct RuleTable {
    pub disease: Disease,
    pub rules: &'static [Rule],
    /// Appended once the score reaches the Moderate cut.
    pub moderate_recommendations: &'static [&'static str],
    /// Appended once the score reaches the High cut.
    pub high_recommendations: &'static [&'static str],
}

pub fn detect(disease: Disease, features: &FeatureVector) -> DiseaseResult {
    evaluate(disease.rule_table(), features)
}

pub fn evaluate(table: &RuleTable, features: &FeatureVector) -> DiseaseResult {
    let mut score = 0.0;
    let mut indicators = Vec::new();
    let mut recommendations: Vec<String> = Vec::new();
    let mut rule_evaluations = Vec::with_capacity(table.rules.len());

    for rule in table.rules {
        let fired = (rule.predicate)(features);
        if fired {
            score += rule.weight;
            indicators.push(rule.indicator.to_string());
            push_unique(&mut recommendations, rule.recommendation);
        }
        rule_evaluations.push(RuleEvaluation {
            name: rule.name.to_string(),
            fired,
            threshold: rule.threshold.to_string(),
            weight: rule.weight,
        });
    }

    let risk_score = clamp_score(score);
    let risk_level = RiskLevel::from_score(risk_score);
    if risk_level >= RiskLevel::Moderate {
        for rec in table.moderate_recommendations {
            push_unique(&mut recommendations, rec);
        }
    }
    if risk_level == RiskLevel::High {
        for rec in table.high_recommendations {
            push_unique(&mut recommendations, rec);
        }
    }

    DiseaseResult {
        disease: table.disease,
        risk_score,
        risk_level,
        indicators,
        recommendations,
        rule_evaluations,
    }
}

pub(crate) fn has_saccades(f: &FeatureVector) -> bool {
    f.saccade_count >= 1.0
}

pub(crate) fn has_fixations(f: &FeatureVector) -> bool {
    f.fixation_count >= 1.0
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}
