mod cli;
mod config;
mod logging;

use cli::Args;
use config::ConfigFile;
use sbom_verify::adapters::outbound::authority::{AcceptAllAuthority, CachingChecksumAuthority};
use sbom_verify::adapters::outbound::console::StderrProgressReporter;
use sbom_verify::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use sbom_verify::application::dto::{OutputFormat, VerifyRequest, DEFAULT_JOBS};
use sbom_verify::application::factories::FormatterFactory;
use sbom_verify::application::use_cases::VerifyArtifactsUseCase;
use sbom_verify::ports::outbound::OutputPresenter;
use sbom_verify::shared::error::{ExitCode, SbomError};
use sbom_verify::shared::{CancellationFlag, Result};
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_ROOT: &str = "./sbom-files";

/// Effective settings after merging CLI arguments over the config file
#[derive(Debug)]
struct Settings {
    root: PathBuf,
    format: OutputFormat,
    jobs: usize,
    output: Option<PathBuf>,
}

impl Settings {
    fn resolve(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();
        let config_format = config.output_format()?;

        Ok(Self {
            root: args
                .root
                .or(config.root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
            format: args.format.or(config_format).unwrap_or_default(),
            jobs: args.jobs.or(config.jobs).unwrap_or(DEFAULT_JOBS),
            output: args.output.or(config.output),
        })
    }
}

#[tokio::main]
async fn main() {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    logging::init_logging(args.verbose)?;

    // Load config file (explicit path or auto-discovery) and merge with CLI
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(args, config)?;
    tracing::debug!(?settings, "resolved settings");

    validate_root_path(&settings.root)?;

    let cancellation = CancellationFlag::new();
    listen_for_interrupt(cancellation.clone());

    // Create use case with injected dependencies
    let use_case = VerifyArtifactsUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        CachingChecksumAuthority::new(AcceptAllAuthority::new()),
        StderrProgressReporter::new(),
    );

    // Execute use case
    let mut request = VerifyRequest::new(settings.root.clone(), settings.jobs);
    if let Some(report_path) = settings
        .output
        .as_deref()
        .and_then(|output| report_path_below_root(output, &settings.root))
    {
        tracing::info!(path = %report_path.display(), "report is written below the artifact root, excluding it from discovery");
        request = request.with_excluded(report_path);
    }
    let response = use_case.execute(request, &cancellation).await?;

    // Format and present the report
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.report)?;

    let presenter: Box<dyn OutputPresenter> = match settings.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&formatted_output)?;

    Ok(response.exit_code())
}

fn load_config(explicit_path: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit_path {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| anyhow::anyhow!("Failed to determine current directory: {}", e))?;
            config::discover_config(&cwd)
        }
    }
}

/// Sets the cancellation flag on Ctrl-C so the run stops between files
fn listen_for_interrupt(cancellation: CancellationFlag) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n⏹️  Interrupt received, stopping after the current artifact...");
            cancellation.cancel();
        }
    });
}

/// Returns the report path as discovery would spell it, if the report lands below `root`
///
/// The report may not exist yet, so only its parent directory is resolved.
fn report_path_below_root(output: &Path, root: &Path) -> Option<PathBuf> {
    let file_name = output.file_name()?;
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let canonical_output = parent.canonicalize().ok()?.join(file_name);
    let canonical_root = root.canonicalize().ok()?;
    let relative = canonical_output.strip_prefix(&canonical_root).ok()?;

    Some(root.join(relative))
}

fn validate_root_path(path: &Path) -> Result<()> {
    let invalid = |reason: String| -> anyhow::Error {
        SbomError::InvalidRootPath {
            path: path.to_path_buf(),
            reason,
        }
        .into()
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist".to_string()));
    }

    // Security check: Reject symbolic links for the artifact root
    let metadata = std::fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read path metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Artifact root is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        ));
    }

    if !path.is_dir() {
        return Err(invalid("Not a directory".to_string()));
    }

    let canonical_path = path
        .canonicalize()
        .map_err(|e| invalid(format!("Failed to canonicalize path: {}", e)))?;

    if !canonical_path.is_dir() {
        return Err(invalid("Resolved path is not a directory".to_string()));
    }

    Ok(())
}
