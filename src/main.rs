use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_gazeqc::batch::{self, BatchOptions};
use kira_gazeqc::cli::{Cli, Commands, RunArgs, SynthArgs, ValidateArgs};
use kira_gazeqc::ctx::Ctx;
use kira_gazeqc::io;
use kira_gazeqc::pipeline;
use kira_gazeqc::scores::DiseaseSelection;
use kira_gazeqc::synth::{self, SynthSpec};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args)?,
        Commands::Validate(args) => handle_validate(args)?,
        Commands::Synth(args) => handle_synth(args)?,
    }

    Ok(())
}

fn handle_run(args: RunArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let selection = DiseaseSelection::parse(&args.diseases)?;

    if args.input.len() > 1 {
        let options = BatchOptions {
            out_dir: args.out,
            config,
            selection,
            write_json: args.json,
            write_tsv: args.tsv,
            write_report: args.report,
            threads: args.threads,
        };
        let outcomes = batch::run_batch(&args.input, &options)?;
        for o in &outcomes {
            match &o.error {
                None => println!(
                    "{}\t{}\t{:.2}\t{}",
                    o.label,
                    o.highest_risk_disease.as_deref().unwrap_or("none"),
                    o.highest_risk_score,
                    o.risk_level.as_deref().unwrap_or("Low")
                ),
                Some(err) => println!("{}\tfailed\t{}", o.label, err),
            }
        }
        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        if failed > 0 {
            anyhow::bail!("{} of {} inputs failed", failed, outcomes.len());
        }
        return Ok(());
    }

    let Some(input) = args.input.into_iter().next() else {
        anyhow::bail!("--input is required");
    };
    let mut ctx = Ctx::new(
        input,
        args.out,
        config,
        selection,
        args.json,
        args.tsv,
        args.report,
        env!("CARGO_PKG_VERSION"),
    );
    pipeline::full().run(&mut ctx)?;
    print_summary(&ctx)
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let mut ctx = Ctx::new(
        args.input,
        std::path::PathBuf::from("."),
        config,
        DiseaseSelection::all(),
        false,
        false,
        false,
        env!("CARGO_PKG_VERSION"),
    );
    pipeline::validate().run(&mut ctx)?;
    print_validate_summary(&ctx)
}

fn handle_synth(args: SynthArgs) -> Result<()> {
    let spec = SynthSpec {
        duration_ms: args.duration_ms,
        sampling_rate: args.sampling_rate,
        noise_std: args.noise_std,
        saccade_probability: args.saccade_probability,
        with_pupil: args.pupil,
        seed: args.seed,
        subject_id: args.subject_id,
        ..SynthSpec::default()
    };
    let recording = synth::generate(&spec)?;
    io::write_json(&args.out, &recording)?;
    println!(
        "wrote {} samples to {}",
        recording.len(),
        args.out.display()
    );
    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(&ctx.warnings);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) -> Result<()> {
    let recording = ctx.recording()?;
    let counts = ctx.processed()?.event_counts();
    println!("kira-gazeqc validate ok");
    println!("samples: {}", recording.len());
    println!("duration_ms: {:.1}", recording.duration_ms());
    println!("fixations: {}", counts.fixations);
    println!("saccades: {}", counts.saccades);
    println!("smooth_pursuits: {}", counts.smooth_pursuits);
    println!("unclassified_samples: {}", counts.unclassified_samples);
    print_warnings(&ctx.warnings);
    Ok(())
}

fn print_warnings(warnings: &[String]) {
    if !warnings.is_empty() {
        println!("warnings:");
        for warning in warnings {
            println!("- {}", warning);
        }
    }
}
