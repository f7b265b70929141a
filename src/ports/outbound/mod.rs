/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, checksum authority, console, etc.).
pub mod artifact_store;
pub mod checksum_authority;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod sbom_source;

pub use artifact_store::{ArtifactReader, ArtifactStore};
pub use checksum_authority::{AuthorityDecision, ChecksumAuthority};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use sbom_source::SbomSource;
