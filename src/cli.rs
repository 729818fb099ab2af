use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PipelineConfig;

#[derive(Debug, Parser)]
#[command(
    name = "kira-gazeqc",
    version,
    about = "Eye-movement screening pipeline"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Analyze one or more recordings and write reports")]
    Run(RunArgs),
    #[command(about = "Load, validate and preprocess a recording without writing outputs")]
    Validate(ValidateArgs),
    #[command(about = "Write a seeded synthetic recording")]
    Synth(SynthArgs),
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(long, help = "JSON config file (.gz allowed)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Saccade velocity threshold, deg/s")]
    pub velocity_threshold: Option<f64>,

    #[arg(long, help = "Saccade acceleration threshold, deg/s^2")]
    pub acceleration_threshold: Option<f64>,

    #[arg(long, help = "Minimum fixation duration, ms")]
    pub fixation_min_duration: Option<f64>,

    #[arg(long, help = "Screen pixels per degree of visual angle")]
    pub pixels_per_degree: Option<f64>,
}

impl ConfigArgs {
    pub fn resolve(&self) -> anyhow::Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(v) = self.velocity_threshold {
            config.velocity_threshold_deg_s = v;
        }
        if let Some(v) = self.acceleration_threshold {
            config.acceleration_threshold_deg_s2 = v;
        }
        if let Some(v) = self.fixation_min_duration {
            config.fixation_min_duration_ms = v;
        }
        if let Some(v) = self.pixels_per_degree {
            config.pixels_per_degree = v;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, num_args = 1.., required = true, help = "Recording JSON file (repeatable)")]
    pub input: Vec<PathBuf>,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = false, help = "Write the plain-text report")]
    pub report: bool,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Diseases to screen: parkinsons,alzheimers,asd,adhd (default all)"
    )]
    pub diseases: Vec<String>,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto)")]
    pub threads: usize,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Recording JSON file")]
    pub input: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Args)]
pub struct SynthArgs {
    #[arg(long, help = "Output JSON path")]
    pub out: PathBuf,

    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[arg(long, default_value_t = 5000.0)]
    pub duration_ms: f64,

    #[arg(long, default_value_t = 1000.0)]
    pub sampling_rate: f64,

    #[arg(long, default_value_t = 0.01, help = "Per-sample gaze jump probability")]
    pub saccade_probability: f64,

    #[arg(long, default_value_t = 2.0, help = "Fixation jitter, px")]
    pub noise_std: f64,

    #[arg(long, default_value_t = false, help = "Include a pupil trace")]
    pub pupil: bool,

    #[arg(long)]
    pub subject_id: Option<String>,
}
