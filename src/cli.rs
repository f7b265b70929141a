use clap::builder::RangedU64ValueParser;
use clap::Parser;
use sbom_verify::application::dto::OutputFormat;
use std::path::PathBuf;

/// Verify on-disk artifacts against the SHA-1 digests declared in SBOMs
#[derive(Parser, Debug)]
#[command(name = "sbom-verify")]
#[command(version)]
#[command(about = "Verify on-disk artifacts against the SHA-1 digests declared in SBOMs", long_about = None)]
pub struct Args {
    /// Artifact root containing SBOM files and artifacts [default: ./sbom-files]
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Report format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of SBOM files verified concurrently [default: 4]
    #[arg(short, long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub jobs: Option<usize>,

    /// Path to a config file (defaults to ./sbom-verify.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
