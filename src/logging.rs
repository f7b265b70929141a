use anyhow::anyhow;
use sbom_verify::shared::Result;
use tracing_subscriber::EnvFilter;

/// Initialize diagnostic logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for this crate with `--verbose`.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "warn,sbom_verify=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("logging initialized");

    Ok(())
}
