use async_trait::async_trait;
use sbom_verify::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ChecksumAuthority that records every checksum it is asked about
#[derive(Default, Clone)]
pub struct MockChecksumAuthority {
    rejected: Vec<String>,
    unavailable: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockChecksumAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects documents whose SHA-1 is `checksum`
    pub fn rejecting(mut self, checksum: &str) -> Self {
        self.rejected.push(checksum.to_string());
        self
    }

    /// Fails every validation as if the authority could not be reached
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChecksumAuthority for MockChecksumAuthority {
    async fn validate(&self, checksum: &Checksum) -> Result<AuthorityDecision> {
        self.calls.lock().unwrap().push(checksum.to_string());

        if self.unavailable {
            return Err(SbomError::ValidationUnavailable {
                details: "authority endpoint timed out".to_string(),
            }
            .into());
        }

        if self.rejected.iter().any(|r| checksum.matches(r)) {
            Ok(AuthorityDecision::Rejected)
        } else {
            Ok(AuthorityDecision::Accepted)
        }
    }
}
