use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{DiseaseEntry, GazeQcV1, RuleFlag, Summary};

pub fn build_report(ctx: &Ctx) -> Result<GazeQcV1> {
    let processed = ctx.processed()?;
    let features = ctx.features()?;
    let summary = ctx.summary.as_ref().context("summary missing")?;

    let mut report = ctx.report.clone();
    report.config = ctx.config.clone();

    let counts = processed.event_counts();
    report.events.filter = Some(match processed.filter {
        crate::preprocess::FilterKind::SavitzkyGolay { window, polyorder } => {
            format!("savitzky_golay(window={}, polyorder={})", window, polyorder)
        }
        crate::preprocess::FilterKind::Median { kernel } => {
            format!("median(kernel={})", kernel)
        }
    });
    report.events.fixations = counts.fixations as u64;
    report.events.saccades = counts.saccades as u64;
    report.events.smooth_pursuits = counts.smooth_pursuits as u64;
    report.events.unclassified_samples = counts.unclassified_samples as u64;

    report.features = features.to_map();

    let mut disease_analysis = BTreeMap::new();
    let mut rule_evaluations = BTreeMap::new();
    for (disease, result) in &ctx.disease_analysis {
        disease_analysis.insert(
            disease.as_str().to_string(),
            DiseaseEntry {
                risk_score: result.risk_score,
                risk_level: result.risk_level.to_string(),
                indicators: result.indicators.clone(),
                recommendations: result.recommendations.clone(),
            },
        );
        rule_evaluations.insert(
            disease.as_str().to_string(),
            result
                .rule_evaluations
                .iter()
                .map(|r| RuleFlag {
                    name: r.name.clone(),
                    fired: r.fired,
                    threshold: Some(r.threshold.clone()),
                    weight: r.weight,
                })
                .collect::<Vec<_>>(),
        );
    }
    report.disease_analysis = disease_analysis;
    report.explainability.rule_evaluations = rule_evaluations;

    report.summary = Some(Summary {
        highest_risk_disease: summary
            .highest_risk_disease
            .map(|d| d.as_str().to_string()),
        highest_risk_score: summary.highest_risk_score,
        risk_level: summary.risk_level.to_string(),
        overall_recommendations: summary.overall_recommendations.clone(),
    });
    report.warnings = ctx.warnings.clone();

    Ok(report)
}
