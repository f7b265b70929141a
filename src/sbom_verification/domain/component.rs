use super::digest::{Digest, HashAlgorithm};

/// Component entry of an SBOM: one artifact with its declared digests
///
/// The name doubles as the artifact's path relative to the artifact root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    version: String,
    hashes: Vec<Digest>,
}

impl Component {
    pub fn new(name: String, version: String, hashes: Vec<Digest>) -> Self {
        Self {
            name,
            version,
            hashes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn hashes(&self) -> &[Digest] {
        &self.hashes
    }

    /// Returns the content of the first digest declared for `algorithm`.
    ///
    /// Later entries for the same algorithm are ignored.
    pub fn declared_digest(&self, algorithm: HashAlgorithm) -> Option<&str> {
        self.hashes
            .iter()
            .find(|digest| digest.algorithm() == algorithm.as_str())
            .map(Digest::content)
    }
}
