use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::preprocess;

pub struct Stage2Preprocess;

impl Stage2Preprocess {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Preprocess {
    fn name(&self) -> &'static str {
        "stage2_preprocess"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let processed = preprocess::process(ctx.recording()?, &ctx.config)?;
        let counts = processed.event_counts();
        for warning in &processed.warnings {
            warn!(label = %ctx.label, "{}", warning);
        }
        info!(
            fixations = counts.fixations,
            saccades = counts.saccades,
            smooth_pursuits = counts.smooth_pursuits,
            unclassified_samples = counts.unclassified_samples,
            "events_ready"
        );
        ctx.warnings.extend(processed.warnings.iter().cloned());
        ctx.processed = Some(processed);
        Ok(())
    }
}
