use crate::shared::error::SbomError;
use std::fmt;

/// Hash algorithms the checksum engine can compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
}

impl HashAlgorithm {
    /// Parses a CycloneDX algorithm identifier.
    ///
    /// Matching is exact: "SHA-1" is supported, "sha1" or "SHA1" are not.
    pub fn parse(identifier: &str) -> std::result::Result<Self, SbomError> {
        match identifier {
            "SHA-1" => Ok(HashAlgorithm::Sha1),
            other => Err(SbomError::UnsupportedAlgorithm {
                algorithm: other.to_string(),
            }),
        }
    }

    /// The identifier used for this algorithm in SBOM `hashes` entries
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A digest declared by an SBOM component: algorithm identifier plus hex content
///
/// Both fields are kept exactly as written in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    algorithm: String,
    content: String,
}

impl Digest {
    pub fn new(algorithm: String, content: String) -> Self {
        Self { algorithm, content }
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// NewType wrapper for a computed checksum (lowercase hex)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum(String);

impl Checksum {
    /// Encodes raw hash bytes as lowercase hex
    pub fn from_bytes(raw: &[u8]) -> Self {
        Self(hex::encode(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison against a declared digest
    pub fn matches(&self, declared: &str) -> bool {
        self.0 == declared
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
