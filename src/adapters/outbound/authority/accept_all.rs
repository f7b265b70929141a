use crate::ports::outbound::{AuthorityDecision, ChecksumAuthority};
use crate::sbom_verification::domain::Checksum;
use crate::shared::Result;
use async_trait::async_trait;

/// AcceptAllAuthority adapter accepting every SBOM checksum
///
/// Stand-in for a real registry or signature check. It never rejects and
/// never fails.
pub struct AcceptAllAuthority;

impl AcceptAllAuthority {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AcceptAllAuthority {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChecksumAuthority for AcceptAllAuthority {
    async fn validate(&self, checksum: &Checksum) -> Result<AuthorityDecision> {
        tracing::debug!(checksum = %checksum, "accepting SBOM checksum without external validation");
        Ok(AuthorityDecision::Accepted)
    }
}
