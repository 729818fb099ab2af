use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analyzer::{self, AnalysisResult};
use crate::config::PipelineConfig;
use crate::features::FeatureVector;
use crate::input::Recording;
use crate::preprocess::ProcessedData;
use crate::schema::v1::GazeQcV1;
use crate::scores::{AnalysisSummary, Disease, DiseaseResult, DiseaseSelection};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
    pub report_path: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            json_path: out_dir.join("gazeqc.json"),
            tsv_path: out_dir.join("gazeqc_events.tsv"),
            report_path: out_dir.join("gazeqc_report.txt"),
            out_dir,
        }
    }
}

#[derive(Debug)]
pub struct Ctx {
    pub input: Option<PathBuf>,
    pub label: String,
    pub config: PipelineConfig,
    pub selection: DiseaseSelection,
    pub write_json: bool,
    pub write_tsv: bool,
    pub write_report: bool,
    pub recording: Option<Recording>,
    pub processed: Option<ProcessedData>,
    pub features: Option<FeatureVector>,
    pub disease_analysis: BTreeMap<Disease, DiseaseResult>,
    pub summary: Option<AnalysisSummary>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: GazeQcV1,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        config: PipelineConfig,
        selection: DiseaseSelection,
        write_json: bool,
        write_tsv: bool,
        write_report: bool,
        tool_version: &str,
    ) -> Self {
        let label = crate::input::label_from_path(&input);
        let report = GazeQcV1::empty(tool_version, config.clone());
        Self {
            input: Some(input),
            label,
            config,
            selection,
            write_json,
            write_tsv,
            write_report,
            recording: None,
            processed: None,
            features: None,
            disease_analysis: BTreeMap::new(),
            summary: None,
            warnings: Vec::new(),
            output: OutputPaths::new(out_dir),
            report,
        }
    }

    pub fn from_recording(
        recording: Recording,
        label: &str,
        out_dir: PathBuf,
        config: PipelineConfig,
        selection: DiseaseSelection,
        tool_version: &str,
    ) -> Self {
        let report = GazeQcV1::empty(tool_version, config.clone());
        Self {
            input: None,
            label: label.to_string(),
            config,
            selection,
            write_json: false,
            write_tsv: false,
            write_report: false,
            recording: Some(recording),
            processed: None,
            features: None,
            disease_analysis: BTreeMap::new(),
            summary: None,
            warnings: Vec::new(),
            output: OutputPaths::new(out_dir),
            report,
        }
    }

    pub fn recording(&self) -> Result<&Recording> {
        self.recording.as_ref().context("recording not loaded")
    }

    pub fn processed(&self) -> Result<&ProcessedData> {
        self.processed.as_ref().context("recording not preprocessed")
    }

    pub fn features(&self) -> Result<&FeatureVector> {
        self.features.as_ref().context("features not extracted")
    }

    pub fn result(&self) -> Result<AnalysisResult> {
        Ok(analyzer::assemble(
            self.recording()?,
            self.processed()?,
            *self.features()?,
            self.disease_analysis.clone(),
        ))
    }
}
