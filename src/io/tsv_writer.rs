use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::preprocess::{EventKind, ProcessedData};

pub const EVENTS_HEADER: &str = "type\tstart_index\tend_index\tstart_ms\tduration_ms\tcentroid_x\tcentroid_y\tdispersion\tamplitude_deg\tpeak_velocity_deg_s\tmean_velocity_deg_s";

pub fn write_events_tsv(path: &Path, processed: &ProcessedData) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "{}", EVENTS_HEADER)?;
    for event in &processed.events {
        let payload = match &event.kind {
            EventKind::Fixation {
                centroid_x,
                centroid_y,
                dispersion,
            } => format!(
                "{:.6}\t{:.6}\t{:.6}\t\t\t",
                centroid_x, centroid_y, dispersion
            ),
            EventKind::Saccade {
                amplitude_deg,
                peak_velocity_deg_s,
            } => format!("\t\t\t{:.6}\t{:.6}\t", amplitude_deg, peak_velocity_deg_s),
            EventKind::SmoothPursuit {
                mean_velocity_deg_s,
            } => format!("\t\t\t\t\t{:.6}", mean_velocity_deg_s),
        };
        writeln!(
            w,
            "{}\t{}\t{}\t{:.3}\t{:.3}\t{}",
            event.label(),
            event.start_index,
            event.end_index,
            event.start_ms,
            event.duration_ms,
            payload
        )?;
    }
    w.flush()?;

    Ok(())
}
