use clap::Parser;
use std::path::PathBuf;
use tin_extract::OutputFormat;

/// Summarise partitioned TIN snapshots from a landscape-evolution run
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Folder holding the tin.time<T>.p<P>.hdf5 outputs
    pub source_dir: PathBuf,

    /// Number of partitions (CPUs) the run was split across
    #[arg(short, long, default_value_t = 1)]
    pub partitions: u32,

    /// Timestep to load; may be given several times
    #[arg(short, long = "timestep", conflicts_with = "all")]
    pub timesteps: Vec<u32>,

    /// Load every timestep found in the folder
    #[arg(long)]
    pub all: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn get_args() -> Args {
    Args::parse()
}
