use crate::sbom_verification::domain::{Checksum, HashAlgorithm};
use crate::shared::error::SbomError;
use sha1::{Digest, Sha1};
use std::io::{self, Read};

/// ChecksumEngine service computing digests of in-memory or streamed content
///
/// The algorithm identifier is resolved before any bytes are hashed, so an
/// unsupported identifier never produces a partial or wrong digest.
pub struct ChecksumEngine;

impl ChecksumEngine {
    /// Computes the digest of `bytes` for an SBOM algorithm identifier (e.g. "SHA-1")
    ///
    /// # Errors
    /// Returns `SbomError::UnsupportedAlgorithm` for any identifier other than "SHA-1"
    pub fn compute(bytes: &[u8], algorithm: &str) -> Result<Checksum, SbomError> {
        let algorithm = HashAlgorithm::parse(algorithm)?;
        Ok(Self::compute_with(bytes, algorithm))
    }

    /// Computes the digest of `bytes` for an already resolved algorithm
    pub fn compute_with(bytes: &[u8], algorithm: HashAlgorithm) -> Checksum {
        match algorithm {
            HashAlgorithm::Sha1 => Checksum::from_bytes(Sha1::digest(bytes).as_slice()),
        }
    }

    /// Computes the digest of everything `reader` yields, in fixed-size chunks
    ///
    /// # Errors
    /// Returns the underlying I/O error if the reader fails part way through
    pub fn compute_reader<R: Read>(
        mut reader: R,
        algorithm: HashAlgorithm,
    ) -> io::Result<Checksum> {
        match algorithm {
            HashAlgorithm::Sha1 => {
                let mut hasher = Sha1::new();
                io::copy(&mut reader, &mut hasher)?;
                Ok(Checksum::from_bytes(hasher.finalize().as_slice()))
            }
        }
    }
}
