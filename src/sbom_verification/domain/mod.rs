pub mod component;
pub mod digest;
pub mod outcome;
pub mod report;
pub mod report_metadata;
pub mod sbom_document;

pub use component::Component;
pub use digest::{Checksum, Digest, HashAlgorithm};
pub use outcome::{ComponentOutcome, ComponentReport, FailureReason, FileReport, FileStatus};
pub use report::{VerificationReport, VerificationSummary};
pub use report_metadata::ReportMetadata;
pub use sbom_document::SbomDocument;
