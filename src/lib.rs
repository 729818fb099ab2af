pub mod analyzer;
pub mod batch;
pub mod cli;
pub mod config;
pub mod ctx;
pub mod error;
pub mod features;
pub mod input;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod preprocess;
pub mod schema;
pub mod scores;
pub mod synth;

pub use analyzer::{AnalysisResult, Analyzer, analyze, generate_report};
pub use config::PipelineConfig;
pub use error::AnalysisError;
pub use input::Recording;
