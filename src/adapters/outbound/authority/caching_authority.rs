use crate::ports::outbound::{AuthorityDecision, ChecksumAuthority};
use crate::sbom_verification::domain::Checksum;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingChecksumAuthority wraps a ChecksumAuthority and memoises its decisions.
///
/// Identical SBOM documents (same checksum) are only sent to the inner
/// authority once per run. Errors are never cached, so an unavailable
/// authority is asked again for the next file.
pub struct CachingChecksumAuthority<A: ChecksumAuthority> {
    inner: A,
    cache: Arc<DashMap<Checksum, AuthorityDecision>>,
}

impl<A: ChecksumAuthority> CachingChecksumAuthority<A> {
    /// Creates a new caching authority wrapping the given inner authority
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<A: ChecksumAuthority> ChecksumAuthority for CachingChecksumAuthority<A> {
    async fn validate(&self, checksum: &Checksum) -> Result<AuthorityDecision> {
        if let Some(cached) = self.cache.get(checksum) {
            tracing::debug!(checksum = %checksum, decision = ?*cached, "authority decision cache hit");
            return Ok(*cached);
        }

        let decision = self.inner.validate(checksum).await?;
        self.cache.insert(checksum.clone(), decision);

        Ok(decision)
    }
}
