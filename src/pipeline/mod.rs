use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_input;
pub mod stage2_preprocess;
pub mod stage3_features;
pub mod stage4_detect;
pub mod stage5_summary;
pub mod stage6_output;

use stage0_scaffold::Stage0Scaffold;
use stage1_input::Stage1Input;
use stage2_preprocess::Stage2Preprocess;
use stage3_features::Stage3Features;
use stage4_detect::Stage4Detect;
use stage5_summary::Stage5Summary;
use stage6_output::Stage6Output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}

pub fn full() -> Pipeline {
    Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Input::new()),
        Box::new(Stage2Preprocess::new()),
        Box::new(Stage3Features::new()),
        Box::new(Stage4Detect::new()),
        Box::new(Stage5Summary::new()),
        Box::new(Stage6Output::new()),
    ])
}

pub fn validate() -> Pipeline {
    Pipeline::new(vec![
        Box::new(Stage1Input::new()),
        Box::new(Stage2Preprocess::new()),
    ])
}
