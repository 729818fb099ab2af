use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::features;
use crate::pipeline::Stage;

pub struct Stage3Features;

impl Stage3Features {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Features {
    fn name(&self) -> &'static str {
        "stage3_features"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let features = features::extract(ctx.processed()?, &ctx.config);
        info!(
            saccade_rate = features.saccade_rate,
            mean_fixation_duration = features.mean_fixation_duration,
            "features_ready"
        );
        ctx.features = Some(features);
        Ok(())
    }
}
