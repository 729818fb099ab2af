use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::input;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.recording.is_none() {
            let path = ctx
                .input
                .clone()
                .context("no input path and no in-memory recording")?;
            info!(input = %path.display(), "input_file");
            ctx.recording = Some(input::load_recording(&path)?);
        }
        let recording = ctx.recording.as_ref().context("recording not loaded")?;

        let meta = &mut ctx.report.input_meta;
        meta.subject_id = recording.subject_id.clone();
        meta.session_id = recording.session_id.clone();
        meta.task_type = recording.task_type.clone();
        meta.samples = Some(recording.len() as u64);
        meta.duration_ms = Some(recording.duration_ms());
        meta.sampling_rate_hz = Some(recording.sampling_rate);
        meta.has_pupil = recording.pupil_sizes.is_some();

        info!(
            samples = recording.len(),
            duration_ms = recording.duration_ms(),
            sampling_rate_hz = recording.sampling_rate,
            "recording_loaded"
        );
        Ok(())
    }
}
