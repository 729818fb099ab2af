use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::summary::summarize;

pub struct Stage5Summary;

impl Stage5Summary {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Summary {
    fn name(&self) -> &'static str {
        "stage5_summary"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let summary = summarize(&ctx.disease_analysis);
        info!(
            highest_risk = summary
                .highest_risk_disease
                .map(|d| d.as_str())
                .unwrap_or("none"),
            risk_level = summary.risk_level.as_str(),
            "summary_ready"
        );
        ctx.summary = Some(summary);
        Ok(())
    }
}
