use clap::Parser;
use std::path::PathBuf;

use depsnap::application::dto::OutputFormat;

/// Replay recorded dependency batches and print the resulting snapshots
#[derive(Parser, Debug)]
#[command(name = "depsnap")]
#[command(version)]
#[command(about = "Replay recorded dependency batches and print the resulting snapshots", long_about = None)]
pub struct Args {
    /// Scenario YAML file: scopes, each with an ordered list of batches
    pub scenario: PathBuf,

    /// Output format: json or text [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Only print the snapshot of this scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Config file (defaults to depsnap.config.yml next to the scenario)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
