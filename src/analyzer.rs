//! End-to-end analysis of one recording: preprocess, extract, detect, summarize.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PipelineConfig;
use crate::error::AnalysisError;
use crate::features::{self, FeatureVector};
use crate::input::Recording;
use crate::preprocess::{self, EventCounts, ProcessedData};
use crate::scores::risk;
use crate::scores::summary::summarize;
use crate::scores::{AnalysisSummary, Disease, DiseaseResult, DiseaseSelection};

pub use crate::io::report::generate_report;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub subject_id: Option<String>,
    pub session_id: Option<String>,
    pub task_type: Option<String>,
    pub features: FeatureVector,
    pub disease_analysis: BTreeMap<Disease, DiseaseResult>,
    pub summary: AnalysisSummary,
    pub events: EventCounts,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: PipelineConfig,
}

impl Analyzer {
    pub fn new(config: PipelineConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn analyze(
        &self,
        recording: &Recording,
        selection: &DiseaseSelection,
    ) -> Result<AnalysisResult, AnalysisError> {
        analyze(recording, &self.config, selection)
    }

    #[cfg(feature = "mt")]
    pub fn analyze_batch(
        &self,
        recordings: &[Recording],
        selection: &DiseaseSelection,
    ) -> Vec<Result<AnalysisResult, AnalysisError>> {
        use rayon::prelude::*;
        recordings
            .par_iter()
            .map(|recording| self.analyze(recording, selection))
            .collect()
    }

    #[cfg(not(feature = "mt"))]
    pub fn analyze_batch(
        &self,
        recordings: &[Recording],
        selection: &DiseaseSelection,
    ) -> Vec<Result<AnalysisResult, AnalysisError>> {
        recordings
            .iter()
            .map(|recording| self.analyze(recording, selection))
            .collect()
    }
}

pub fn analyze(
    recording: &Recording,
    config: &PipelineConfig,
    selection: &DiseaseSelection,
) -> Result<AnalysisResult, AnalysisError> {
    let processed = preprocess::process(recording, config)?;
    let features = features::extract(&processed, config);
    let disease_analysis = detect_all(&features, selection);
    Ok(assemble(recording, &processed, features, disease_analysis))
}

pub fn detect_all(
    features: &FeatureVector,
    selection: &DiseaseSelection,
) -> BTreeMap<Disease, DiseaseResult> {
    let mut results = BTreeMap::new();
    for disease in selection.iter() {
        let result = risk::detect(disease, features);
        debug!(
            disease = disease.as_str(),
            score = result.risk_score,
            fired = result.indicators.len(),
            "detector_evaluated"
        );
        results.insert(disease, result);
    }
    results
}

pub fn assemble(
    recording: &Recording,
    processed: &ProcessedData,
    features: FeatureVector,
    disease_analysis: BTreeMap<Disease, DiseaseResult>,
) -> AnalysisResult {
    let summary = summarize(&disease_analysis);
    AnalysisResult {
        subject_id: recording.subject_id.clone(),
        session_id: recording.session_id.clone(),
        task_type: recording.task_type.clone(),
        features,
        disease_analysis,
        summary,
        events: processed.event_counts(),
        warnings: processed.warnings.clone(),
    }
}
