use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SbomSource port for locating and reading SBOM documents
///
/// This port abstracts the file system operations needed to find the
/// SBOM documents below an artifact root and load their raw bytes.
pub trait SbomSource: Send + Sync {
    /// Discovers SBOM documents below the artifact root
    ///
    /// # Arguments
    /// * `root` - The artifact root directory
    ///
    /// # Returns
    /// Paths of all `*.json` files found recursively, in a stable order
    ///
    /// # Errors
    /// Returns an error if the root itself cannot be traversed
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Reads the raw bytes of an SBOM document
    ///
    /// # Errors
    /// Returns `SbomError::UnreadableFile` if the document cannot be read
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>>;
}
