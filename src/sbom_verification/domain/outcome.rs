use super::digest::Checksum;
use crate::shared::error::SbomError;
use std::path::PathBuf;

/// Why a file or component could not be checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReason {
    kind: String,
    message: String,
}

impl FailureReason {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Builds a reason from an error, keeping the `SbomError` kind when there is one
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<SbomError>() {
            Some(sbom_error) => Self::new(sbom_error.kind(), sbom_error.to_string()),
            None => Self::new("Error", error.to_string()),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message, for single-line report output
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

/// Result of checking one component's artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentOutcome {
    Verified { checksum: Checksum },
    Mismatch { expected: String, actual: Checksum },
    /// The component lists no SHA-1 digest; never counts as verified
    NoDigestDeclared { actual: Checksum },
    Failed(FailureReason),
}

impl ComponentOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, ComponentOutcome::Verified { .. })
    }
}

/// Verification result for a single SBOM component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReport {
    name: String,
    version: String,
    outcome: ComponentOutcome,
}

impl ComponentReport {
    pub fn new(name: String, version: String, outcome: ComponentOutcome) -> Self {
        Self {
            name,
            version,
            outcome,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn outcome(&self) -> &ComponentOutcome {
        &self.outcome
    }
}

/// How far processing of an SBOM file got
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// The document was accepted and parsed; component results are attached
    Processed,
    /// The authority rejected the document checksum; no component was checked
    AuthorityRejected,
    /// The authority could not be asked; the file was skipped
    ValidationUnavailable(FailureReason),
    /// The document could not be read or parsed
    Failed(FailureReason),
    /// The run was cancelled before or while this file was processed
    Cancelled,
}

/// Verification result for one SBOM file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    path: PathBuf,
    sbom_checksum: Option<Checksum>,
    status: FileStatus,
    components: Vec<ComponentReport>,
}

impl FileReport {
    pub fn new(
        path: PathBuf,
        sbom_checksum: Option<Checksum>,
        status: FileStatus,
        components: Vec<ComponentReport>,
    ) -> Self {
        Self {
            path,
            sbom_checksum,
            status,
            components,
        }
    }

    /// Report for a file that was never started because the run was cancelled
    pub fn cancelled(path: PathBuf) -> Self {
        Self::new(path, None, FileStatus::Cancelled, Vec::new())
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn sbom_checksum(&self) -> Option<&Checksum> {
        self.sbom_checksum.as_ref()
    }

    pub fn status(&self) -> &FileStatus {
        &self.status
    }

    pub fn components(&self) -> &[ComponentReport] {
        &self.components
    }
}
