//! sbom-verify - Artifact integrity verification against SBOM digests
//!
//! This library checks the artifacts described by CycloneDX-style SBOM
//! documents: every SBOM checksum is confirmed with a checksum authority,
//! then each component's declared SHA-1 digest is compared with the SHA-1
//! of the artifact on disk. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_verification`): Pure verification logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_verify::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = VerifyArtifactsUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     CachingChecksumAuthority::new(AcceptAllAuthority::new()),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = VerifyRequest::new(PathBuf::from("./sbom-files"), DEFAULT_JOBS);
//! let response = use_case.execute(request, &CancellationFlag::new()).await?;
//!
//! // Format output
//! let output = TextFormatter::new().format(&response.report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_verification;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::authority::{
        AcceptAllAuthority, CachingChecksumAuthority,
    };
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{OutputFormat, VerifyRequest, VerifyResponse, DEFAULT_JOBS};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::VerifyArtifactsUseCase;
    pub use crate::ports::outbound::{
        ArtifactReader, ArtifactStore, AuthorityDecision, ChecksumAuthority, OutputPresenter,
        ProgressReporter, ReportFormatter, SbomSource,
    };
    pub use crate::sbom_verification::domain::{
        Checksum, Component, ComponentOutcome, ComponentReport, Digest, FailureReason,
        FileReport, FileStatus, HashAlgorithm, SbomDocument, VerificationReport,
        VerificationSummary,
    };
    pub use crate::sbom_verification::services::{ArtifactMatcher, ChecksumEngine, SbomParser};
    pub use crate::shared::error::{ExitCode, SbomError};
    pub use crate::shared::{CancellationFlag, Result};
}
