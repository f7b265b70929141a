use crate::shared::Result;
use std::io::Read;
use std::path::Path;

/// Readable handle on an opened artifact
pub type ArtifactReader = Box<dyn Read + Send>;

/// ArtifactStore port for opening the artifacts an SBOM describes
pub trait ArtifactStore: Send + Sync {
    /// Opens the artifact named by an SBOM component for streaming
    ///
    /// # Arguments
    /// * `root` - The artifact root directory
    /// * `name` - The component name, interpreted as a path relative to `root`
    ///
    /// # Returns
    /// A reader over the artifact contents. Artifacts of any size can be
    /// hashed without loading them into memory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The name is absolute, leaves the root or crosses a symlinked directory (`SbomError::PathOutsideRoot`)
    /// - The artifact is missing, not a regular file or cannot be opened (`SbomError::UnreadableFile`)
    fn open_artifact(&self, root: &Path, name: &str) -> Result<ArtifactReader>;
}
