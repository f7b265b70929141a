use crate::ports::outbound::{ArtifactReader, ArtifactStore, SbomSource};
use crate::shared::error::SbomError;
use crate::shared::security::{
    validate_component_path, validate_file_size, validate_no_symlinked_directories,
    validate_regular_file, MAX_SBOM_FILE_SIZE,
};
use crate::shared::Result;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffix identifying SBOM documents
const SBOM_SUFFIX: &str = ".json";

/// FileSystemReader adapter for reading SBOMs and artifacts from the file system
///
/// This adapter implements both SbomSource and ArtifactStore ports.
/// Symbolic links are never followed, neither during discovery nor on reads,
/// including linked directories inside an artifact name.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str, max_size: u64) -> Result<Vec<u8>> {
        let unreadable = |details: String| SbomError::UnreadableFile {
            path: path.to_path_buf(),
            details,
        };

        let file_size = validate_regular_file(path, file_type)
            .and_then(|size| validate_file_size(size, path, max_size).map(|_| size))
            .map_err(|e| unreadable(e.to_string()))?;

        let bytes = fs::read(path).map_err(|e| unreadable(e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            expected_size = file_size,
            read_size = bytes.len(),
            "read {}",
            file_type
        );

        Ok(bytes)
    }

    /// Opens an artifact for streaming after the same file checks as `safe_read_file`
    fn safe_open_file(&self, path: &Path) -> Result<File> {
        let unreadable = |details: String| SbomError::UnreadableFile {
            path: path.to_path_buf(),
            details,
        };

        let file_size =
            validate_regular_file(path, "artifact").map_err(|e| unreadable(e.to_string()))?;
        let file = File::open(path).map_err(|e| unreadable(e.to_string()))?;

        tracing::debug!(path = %path.display(), size = file_size, "opened artifact");
        Ok(file)
    }
}

impl SbomSource for FileSystemReader {
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself must be readable; anything below it is skipped with a warning
                Err(e) if e.depth() == 0 => {
                    return Err(SbomError::InvalidRootPath {
                        path: root.to_path_buf(),
                        reason: e.to_string(),
                    }
                    .into());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };

            let is_sbom = entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(SBOM_SUFFIX));

            if is_sbom {
                files.push(entry.into_path());
            }
        }

        tracing::debug!(root = %root.display(), count = files.len(), "discovered SBOM files");
        Ok(files)
    }

    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        self.safe_read_file(path, "SBOM", MAX_SBOM_FILE_SIZE)
    }
}

impl ArtifactStore for FileSystemReader {
    fn open_artifact(&self, root: &Path, name: &str) -> Result<ArtifactReader> {
        let relative = validate_component_path(name)?;
        validate_no_symlinked_directories(root, &relative)?;
        let artifact_path = root.join(relative);

        let file = self.safe_open_file(&artifact_path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}
