use super::outcome::{ComponentOutcome, FileReport, FileStatus};
use super::report_metadata::ReportMetadata;

/// Aggregate counts over a verification run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerificationSummary {
    pub files_total: usize,
    pub files_processed: usize,
    pub files_rejected: usize,
    pub files_unvalidated: usize,
    pub files_failed: usize,
    pub files_cancelled: usize,
    pub components_verified: usize,
    pub components_mismatched: usize,
    pub components_missing_digest: usize,
    pub components_failed: usize,
}

impl VerificationSummary {
    pub fn from_files(files: &[FileReport]) -> Self {
        let mut summary = Self {
            files_total: files.len(),
            ..Self::default()
        };

        for file in files {
            match file.status() {
                FileStatus::Processed => summary.files_processed += 1,
                FileStatus::AuthorityRejected => summary.files_rejected += 1,
                FileStatus::ValidationUnavailable(_) => summary.files_unvalidated += 1,
                FileStatus::Failed(_) => summary.files_failed += 1,
                FileStatus::Cancelled => summary.files_cancelled += 1,
            }

            for component in file.components() {
                match component.outcome() {
                    ComponentOutcome::Verified { .. } => summary.components_verified += 1,
                    ComponentOutcome::Mismatch { .. } => summary.components_mismatched += 1,
                    ComponentOutcome::NoDigestDeclared { .. } => {
                        summary.components_missing_digest += 1
                    }
                    ComponentOutcome::Failed(_) => summary.components_failed += 1,
                }
            }
        }

        summary
    }

    pub fn components_total(&self) -> usize {
        self.components_verified
            + self.components_mismatched
            + self.components_missing_digest
            + self.components_failed
    }

    /// True when anything other than a clean verification happened.
    ///
    /// Cancellation alone is not a failure; see [`VerificationSummary::was_cancelled`].
    pub fn has_failures(&self) -> bool {
        self.files_rejected > 0
            || self.files_unvalidated > 0
            || self.files_failed > 0
            || self.components_mismatched > 0
            || self.components_missing_digest > 0
            || self.components_failed > 0
    }

    pub fn was_cancelled(&self) -> bool {
        self.files_cancelled > 0
    }
}

/// Complete outcome of a verification run, in discovery order
#[derive(Debug, Clone)]
pub struct VerificationReport {
    metadata: ReportMetadata,
    files: Vec<FileReport>,
    summary: VerificationSummary,
}

impl VerificationReport {
    pub fn new(metadata: ReportMetadata, files: Vec<FileReport>) -> Self {
        let summary = VerificationSummary::from_files(&files);
        Self {
            metadata,
            files,
            summary,
        }
    }

    pub fn metadata(&self) -> &ReportMetadata {
        &self.metadata
    }

    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    pub fn summary(&self) -> &VerificationSummary {
        &self.summary
    }
}
