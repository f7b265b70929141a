use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Maximum SBOM document size (100 MB)
/// This prevents DoS attacks via excessively large documents
pub const MAX_SBOM_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the symlink itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "SBOM", "artifact")
///
/// # Returns
/// The file size in bytes
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates that a component name is a relative path that stays inside the artifact root
///
/// # Security
/// Component names come from untrusted SBOM documents and are joined to the
/// artifact root. Absolute paths, drive prefixes and `..` segments are refused.
///
/// # Returns
/// The name as a relative path, ready to be joined to the root
pub fn validate_component_path(name: &str) -> std::result::Result<PathBuf, SbomError> {
    let path = PathBuf::from(name);

    if name.trim().is_empty() {
        return Err(SbomError::PathOutsideRoot {
            path,
            reason: "Component name is empty".to_string(),
        });
    }

    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(SbomError::PathOutsideRoot {
                    path: PathBuf::from(name),
                    reason: "Parent directory segments are not allowed".to_string(),
                });
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(SbomError::PathOutsideRoot {
                    path: PathBuf::from(name),
                    reason: "Absolute paths are not allowed".to_string(),
                });
            }
        }
    }

    Ok(path)
}

/// Validates that no directory between `root` and `root/relative` is a symbolic link
///
/// # Security
/// `validate_regular_file` only inspects the last path segment, so a linked
/// directory earlier in the name could otherwise lead outside the root.
/// Missing directories are left for the read itself to report.
pub fn validate_no_symlinked_directories(
    root: &Path,
    relative: &Path,
) -> std::result::Result<(), SbomError> {
    let Some(parent) = relative.parent() else {
        return Ok(());
    };

    let mut current = root.to_path_buf();
    for component in parent.components() {
        current.push(component);
        let Ok(metadata) = fs::symlink_metadata(&current) else {
            return Ok(());
        };
        if metadata.is_symlink() {
            return Err(SbomError::PathOutsideRoot {
                path: relative.to_path_buf(),
                reason: format!("{} is a symbolic link", current.display()),
            });
        }
    }

    Ok(())
}
