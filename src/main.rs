use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use tin_extract::{Loader, OutputFormat, SnapshotSummary};

mod cli;

use cli::get_args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = get_args();
    let mut loader = Loader::new(&args.source_dir, args.partitions)
        .with_context(|| format!("Failed to open output folder: {:?}", args.source_dir))?;

    let timesteps = if args.all {
        let found = loader.timesteps()?;
        if found.is_empty() {
            bail!("No tin.time*.p0.hdf5 files found in {:?}", args.source_dir);
        }
        found
    } else if args.timesteps.is_empty() {
        vec![0]
    } else {
        args.timesteps.clone()
    };

    info!(
        "Reading {} timestep(s) across {} partition(s) from {:?}",
        timesteps.len(),
        args.partitions,
        args.source_dir
    );

    let pb = if timesteps.len() > 1 {
        let pb = ProgressBar::new(timesteps.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} timesteps ({eta})")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut summaries = Vec::with_capacity(timesteps.len());
    for &timestep in &timesteps {
        loader
            .load(timestep)
            .with_context(|| format!("Failed to load timestep {}", timestep))?;
        if let Some(snapshot) = loader.snapshot() {
            summaries.push(SnapshotSummary::from_snapshot(snapshot));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    match args.format {
        OutputFormat::Text => {
            for summary in &summaries {
                print!("{}", summary);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summaries)
                .context("Failed to serialise summaries")?;
            println!("{}", json);
        }
    }

    Ok(())
}
