use std::collections::BTreeMap;

use crate::scores::{AnalysisSummary, Disease, DiseaseResult, RiskLevel};

/// Aggregates per-disease results. The highest-risk disease is the one with
/// the strictly greatest positive score, earlier diseases winning ties;
/// recommendations are merged in disease order without duplicates.
pub fn summarize(results: &BTreeMap<Disease, DiseaseResult>) -> AnalysisSummary {
    let mut highest: Option<&DiseaseResult> = None;
    for result in results.values() {
        let best = highest.map(|h| h.risk_score).unwrap_or(0.0);
        if result.risk_score > best {
            highest = Some(result);
        }
    }

    let mut overall_recommendations: Vec<String> = Vec::new();
    for result in results.values() {
        for rec in &result.recommendations {
            if !overall_recommendations.contains(rec) {
                overall_recommendations.push(rec.clone());
            }
        }
    }

    AnalysisSummary {
        highest_risk_disease: highest.map(|h| h.disease),
        highest_risk_score: highest.map(|h| h.risk_score).unwrap_or(0.0),
        risk_level: highest.map(|h| h.risk_level).unwrap_or(RiskLevel::Low),
        overall_recommendations,
    }
}
