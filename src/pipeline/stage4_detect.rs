use anyhow::Result;
use tracing::info;

use crate::analyzer;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage4Detect;

impl Stage4Detect {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Detect {
    fn name(&self) -> &'static str {
        "stage4_detect"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let results = analyzer::detect_all(ctx.features()?, &ctx.selection);
        for (disease, result) in &results {
            info!(
                disease = disease.as_str(),
                risk_score = result.risk_score,
                risk_level = result.risk_level.as_str(),
                "disease_scored"
            );
        }
        ctx.disease_analysis = results;
        Ok(())
    }
}
