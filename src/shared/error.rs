use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a failed
/// verification and a run that could not be carried out at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every component of every SBOM was verified
    Success = 0,
    /// At least one artifact, SBOM file or authority check did not verify
    VerificationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid root, config error, output I/O error, etc.)
    ApplicationError = 3,
    /// The run was interrupted before every SBOM file was processed
    Interrupted = 130,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::VerificationFailed => write!(f, "Verification Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::Interrupted => write!(f, "Interrupted (130)"),
        }
    }
}

/// Application-specific errors for SBOM verification.
///
/// Per-file and per-component variants are recorded in the verification
/// report; only root, config and output errors end the run.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    UnreadableFile { path: PathBuf, details: String },

    #[error("Unsupported hash algorithm: {algorithm}\n\n💡 Hint: Only SHA-1 digests can be computed")]
    UnsupportedAlgorithm { algorithm: String },

    #[error("Failed to parse SBOM document: {path}\nDetails: {details}\n\n💡 Hint: The document must be JSON with a \"components\" array")]
    MalformedDocument { path: PathBuf, details: String },

    #[error("Checksum authority unavailable\nDetails: {details}")]
    ValidationUnavailable { details: String },

    #[error("Component path escapes the artifact root: {path}\nReason: {reason}")]
    PathOutsideRoot { path: PathBuf, reason: String },

    #[error("Invalid artifact root: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory with --root")]
    InvalidRootPath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },
}

impl SbomError {
    /// Short machine-friendly name of the error kind, used in structured reports
    pub fn kind(&self) -> &'static str {
        match self {
            SbomError::UnreadableFile { .. } => "UnreadableFile",
            SbomError::UnsupportedAlgorithm { .. } => "UnsupportedAlgorithm",
            SbomError::MalformedDocument { .. } => "MalformedDocument",
            SbomError::ValidationUnavailable { .. } => "ValidationUnavailable",
            SbomError::PathOutsideRoot { .. } => "PathOutsideRoot",
            SbomError::InvalidRootPath { .. } => "InvalidRootPath",
            SbomError::FileWriteError { .. } => "FileWriteError",
            SbomError::ConfigError { .. } => "ConfigError",
        }
    }
}
