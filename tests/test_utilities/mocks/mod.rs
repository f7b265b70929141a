/// Mock implementations for testing
mod mock_artifact_store;
mod mock_checksum_authority;
mod mock_progress_reporter;

pub use mock_artifact_store::MockArtifactStore;
pub use mock_checksum_authority::MockChecksumAuthority;
pub use mock_progress_reporter::MockProgressReporter;
