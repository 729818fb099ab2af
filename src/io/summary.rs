use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let recording = ctx.recording()?;
    let counts = ctx.processed()?.event_counts();
    let summary = ctx.summary.as_ref().context("summary missing")?;

    let mut out = String::new();
    out.push_str(&format!("kira-gazeqc v{}\n", version));
    out.push_str(&format!(
        "Input: {} samples, {:.0} ms, {} Hz\n",
        recording.len(),
        recording.duration_ms(),
        recording.sampling_rate
    ));
    out.push_str(&format!(
        "Events: {} fixations, {} saccades, {} pursuits\n",
        counts.fixations, counts.saccades, counts.smooth_pursuits
    ));
    match summary.highest_risk_disease {
        Some(disease) => out.push_str(&format!(
            "Highest risk: {} ({:.2}, {})\n",
            disease, summary.highest_risk_score, summary.risk_level
        )),
        None => out.push_str("Highest risk: none\n"),
    }

    let fired: Vec<String> = ctx
        .disease_analysis
        .iter()
        .flat_map(|(disease, result)| {
            result
                .indicators
                .iter()
                .map(move |i| format!("{}: {}", disease, i))
        })
        .collect();
    if fired.is_empty() {
        out.push_str("Indicators: none\n");
    } else {
        out.push_str(&format!("Indicators: {}\n", fired.join("; ")));
    }

    Ok(out)
}
