use crate::sbom_verification::domain::{Checksum, Component, ComponentOutcome, HashAlgorithm};

/// ArtifactMatcher service comparing computed artifact checksums with declared digests
pub struct ArtifactMatcher;

impl ArtifactMatcher {
    /// Decides the outcome for a component given the checksum of its artifact
    ///
    /// The first declared digest for `algorithm` is authoritative and compared
    /// with exact string equality. A component without such a digest is
    /// `NoDigestDeclared`, never verified.
    pub fn evaluate(
        component: &Component,
        algorithm: HashAlgorithm,
        actual: Checksum,
    ) -> ComponentOutcome {
        match component.declared_digest(algorithm) {
            None => ComponentOutcome::NoDigestDeclared { actual },
            Some(expected) if actual.matches(expected) => {
                ComponentOutcome::Verified { checksum: actual }
            }
            Some(expected) => ComponentOutcome::Mismatch {
                expected: expected.to_string(),
                actual,
            },
        }
    }
}
