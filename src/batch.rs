use std::collections::BTreeSet;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::ctx::Ctx;
use crate::input::label_from_path;
use crate::pipeline;
use crate::scores::DiseaseSelection;

#[cfg(feature = "mt")]
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub out_dir: PathBuf,
    pub config: PipelineConfig,
    pub selection: DiseaseSelection,
    pub write_json: bool,
    pub write_tsv: bool,
    pub write_report: bool,
    pub threads: usize,
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub label: String,
    pub input: PathBuf,
    pub highest_risk_disease: Option<String>,
    pub highest_risk_score: f64,
    pub risk_level: Option<String>,
    pub error: Option<String>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub fn run_batch(inputs: &[PathBuf], options: &BatchOptions) -> Result<Vec<BatchOutcome>> {
    let labels: Vec<String> = inputs.iter().map(|p| label_from_path(p)).collect();
    let mut seen = BTreeSet::new();
    for label in &labels {
        if !seen.insert(label.as_str()) {
            bail!("duplicate input label '{}'; output directories would collide", label);
        }
    }
    std::fs::create_dir_all(&options.out_dir)
        .with_context(|| format!("failed to create {}", options.out_dir.display()))?;

    let jobs: Vec<(&PathBuf, &String)> = inputs.iter().zip(labels.iter()).collect();

    #[cfg(feature = "mt")]
    let outcomes: Vec<BatchOutcome> = {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if options.threads > 0 {
            builder = builder.num_threads(options.threads);
        }
        let pool = builder
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
        pool.install(|| {
            jobs.par_iter()
                .map(|(input, label)| run_one(input, label, options))
                .collect()
        })
    };

    #[cfg(not(feature = "mt"))]
    let outcomes: Vec<BatchOutcome> = jobs
        .iter()
        .map(|(input, label)| run_one(input, label, options))
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!(inputs = outcomes.len(), failed, "batch_finished");
    write_batch_tsv(&options.out_dir.join("gazeqc_batch.tsv"), &outcomes)?;
    Ok(outcomes)
}

fn run_one(input: &Path, label: &str, options: &BatchOptions) -> BatchOutcome {
    let mut ctx = Ctx::new(
        input.to_path_buf(),
        options.out_dir.join(label),
        options.config.clone(),
        options.selection.clone(),
        options.write_json,
        options.write_tsv,
        options.write_report,
        env!("CARGO_PKG_VERSION"),
    );
    let mut outcome = BatchOutcome {
        label: label.to_string(),
        input: input.to_path_buf(),
        highest_risk_disease: None,
        highest_risk_score: 0.0,
        risk_level: None,
        error: None,
    };
    match pipeline::full().run(&mut ctx) {
        Ok(()) => {
            if let Some(summary) = &ctx.summary {
                outcome.highest_risk_disease =
                    summary.highest_risk_disease.map(|d| d.as_str().to_string());
                outcome.highest_risk_score = summary.highest_risk_score;
                outcome.risk_level = Some(summary.risk_level.to_string());
            }
        }
        Err(err) => {
            warn!(label, error = %format!("{:#}", err), "batch_input_failed");
            outcome.error = Some(format!("{:#}", err));
        }
    }
    outcome
}

pub fn write_batch_tsv(path: &Path, outcomes: &[BatchOutcome]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    writeln!(
        w,
        "label\tinput\tstatus\thighest_risk_disease\thighest_risk_score\trisk_level\terror"
    )?;
    for o in outcomes {
        let score = if o.is_ok() {
            format!("{:.4}", o.highest_risk_score)
        } else {
            String::new()
        };
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            o.label,
            o.input.display(),
            if o.is_ok() { "ok" } else { "failed" },
            o.highest_risk_disease.as_deref().unwrap_or(""),
            score,
            o.risk_level.as_deref().unwrap_or(""),
            o.error.as_deref().unwrap_or("").replace(['\t', '\n'], " ")
        )?;
    }
    w.flush()?;
    Ok(())
}
