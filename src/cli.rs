use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nearlink closest-pair component finder.
#[derive(Parser)]
#[command(
    name = "nearlink",
    version,
    about = "K closest point pairs and the largest components they connect"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Select the closest pairs and rank the components they form.
    Solve(SolveArgs),
    /// Write reproducible random points to a text file.
    Generate(GenerateArgs),
}

/// Arguments for the `solve` subcommand.
#[derive(clap::Args)]
pub struct SolveArgs {
    /// Path to TOML configuration file. Defaults to `nearlink.toml` when it
    /// exists.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input points path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the number of closest pairs to select.
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Override the number of largest components to report.
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Run ingestion, evaluation and aggregation as concurrent stages.
    #[arg(long)]
    pub streaming: bool,

    /// Override the streaming line schedule (points or triangular).
    #[arg(long)]
    pub schedule: Option<String>,

    /// Write the full solution as pretty JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print every selected pair.
    #[arg(long)]
    pub print_pairs: bool,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Number of points to write.
    #[arg(short = 'n', long)]
    pub count: usize,

    /// RNG seed. Drawn from the OS when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Coordinate width in bits.
    #[arg(short, long, default_value_t = 24)]
    pub bit_width: u32,

    /// Coordinates per point.
    #[arg(short, long, default_value_t = 3)]
    pub dims: usize,

    /// Path for the generated points file.
    #[arg(short, long)]
    pub output: PathBuf,
}
