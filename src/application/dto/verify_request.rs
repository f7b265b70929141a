use std::path::PathBuf;

/// Default number of SBOM files verified concurrently
pub const DEFAULT_JOBS: usize = 4;

/// VerifyRequest - Internal request DTO for the artifact verification use case
#[derive(Debug, Clone)]
pub struct VerifyRequest {
    /// Artifact root: searched for SBOM documents, and the base for component names
    pub root: PathBuf,
    /// Maximum number of SBOM files processed at the same time (at least 1)
    pub jobs: usize,
    /// Discovered files that are not SBOMs, such as a report written below the root
    pub excluded: Vec<PathBuf>,
}

impl VerifyRequest {
    pub fn new(root: PathBuf, jobs: usize) -> Self {
        Self {
            root,
            jobs: jobs.max(1),
            excluded: Vec::new(),
        }
    }

    /// Skips `path` during discovery; it must be spelled the way discovery
    /// reports paths, i.e. `root` joined with the relative path
    pub fn with_excluded(mut self, path: PathBuf) -> Self {
        self.excluded.push(path);
        self
    }
}
