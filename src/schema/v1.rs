use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub subject_id: Option<String>,
    pub session_id: Option<String>,
    pub task_type: Option<String>,
    pub samples: Option<u64>,
    pub duration_ms: Option<f64>,
    pub sampling_rate_hz: Option<f64>,
    pub has_pupil: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventSummary {
    pub filter: Option<String>,
    pub fixations: u64,
    pub saccades: u64,
    pub smooth_pursuits: u64,
    pub unclassified_samples: u64,
    pub events_tsv_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseEntry {
    pub risk_score: f64,
    pub risk_level: String,
    pub indicators: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub highest_risk_disease: Option<String>,
    pub highest_risk_score: f64,
    pub risk_level: String,
    pub overall_recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFlag {
    pub name: String,
    pub fired: bool,
    pub threshold: Option<String>,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Explainability {
    pub rule_evaluations: BTreeMap<String, Vec<RuleFlag>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GazeQcV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub config: PipelineConfig,
    pub events: EventSummary,
    pub features: BTreeMap<String, f64>,
    pub disease_analysis: BTreeMap<String, DiseaseEntry>,
    pub summary: Option<Summary>,
    pub explainability: Explainability,
    pub warnings: Vec<String>,
}

impl GazeQcV1 {
    pub fn empty(tool_version: &str, config: PipelineConfig) -> Self {
        Self {
            tool: "kira-gazeqc".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                subject_id: None,
                session_id: None,
                task_type: None,
                samples: None,
                duration_ms: None,
                sampling_rate_hz: None,
                has_pupil: false,
            },
            config,
            events: EventSummary::default(),
            features: BTreeMap::new(),
            disease_analysis: BTreeMap::new(),
            summary: None,
            explainability: Explainability::default(),
            warnings: Vec::new(),
        }
    }
}
