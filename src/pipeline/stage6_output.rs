use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, report, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage6Output;

impl Stage6Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Output {
    fn name(&self) -> &'static str {
        "stage6_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.report = json_writer::build_report(ctx)?;

        if ctx.write_json {
            crate::io::write_json(&ctx.output.json_path, &ctx.report)?;
        }
        if ctx.write_tsv {
            tsv_writer::write_events_tsv(&ctx.output.tsv_path, ctx.processed()?)?;
        }
        if ctx.write_report {
            let text = report::generate_report(&ctx.result()?);
            std::fs::write(&ctx.output.report_path, text).with_context(|| {
                format!("failed to write {}", ctx.output.report_path.display())
            })?;
        }

        info!("stage6_output_ready");
        Ok(())
    }
}
