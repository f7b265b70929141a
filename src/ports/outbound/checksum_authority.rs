use crate::sbom_verification::domain::Checksum;
use crate::shared::Result;
use async_trait::async_trait;

/// Decision of the checksum authority about an SBOM document checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityDecision {
    Accepted,
    Rejected,
}

/// ChecksumAuthority port for external validation of SBOM document checksums
///
/// The authority is a trust decision made independently of the document's
/// contents, e.g. a registry confirming the SBOM has not been tampered with.
///
/// # Async Support
/// Real implementations are expected to perform network calls or signature
/// checks. Implementations must be `Send + Sync`; callers must not assume a
/// call is free of side effects.
#[async_trait]
pub trait ChecksumAuthority: Send + Sync {
    /// Validates the checksum of an SBOM document
    ///
    /// # Returns
    /// `Accepted` or `Rejected`
    ///
    /// # Errors
    /// Returns an error (conventionally `SbomError::ValidationUnavailable`)
    /// when no decision could be obtained. The caller skips the file.
    async fn validate(&self, checksum: &Checksum) -> Result<AuthorityDecision>;
}
