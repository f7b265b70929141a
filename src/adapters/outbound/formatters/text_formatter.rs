use crate::ports::outbound::ReportFormatter;
use crate::sbom_verification::domain::{
    ComponentOutcome, ComponentReport, FileReport, FileStatus, VerificationReport,
    VerificationSummary,
};
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter for human-readable verification output
///
/// One block per SBOM file, one line per component, followed by a summary.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_file(&self, out: &mut String, file: &FileReport) -> std::fmt::Result {
        let path = file.path().display();
        writeln!(out, "Processing SBOM file: {}", path)?;

        if let Some(checksum) = file.sbom_checksum() {
            writeln!(out, "SBOM file checksum: {}", checksum)?;
        }

        match file.status() {
            FileStatus::Processed => {
                for component in file.components() {
                    self.write_component(out, component)?;
                }
            }
            FileStatus::AuthorityRejected => {
                writeln!(out, "Checksum validation failed for {}", path)?;
            }
            FileStatus::ValidationUnavailable(reason) => {
                writeln!(
                    out,
                    "Checksum validation unavailable for {}: {}",
                    path,
                    reason.summary()
                )?;
            }
            FileStatus::Failed(reason) if reason.kind() == "MalformedDocument" => {
                writeln!(out, "Failed to parse SBOM file {}: {}", path, reason.summary())?;
            }
            FileStatus::Failed(reason) => {
                writeln!(out, "Failed to read SBOM file {}: {}", path, reason.summary())?;
            }
            FileStatus::Cancelled => {
                // Components finished before the cancellation are still listed
                for component in file.components() {
                    self.write_component(out, component)?;
                }
                writeln!(out, "Verification of {} was cancelled", path)?;
            }
        }

        Ok(())
    }

    fn write_component(&self, out: &mut String, component: &ComponentReport) -> std::fmt::Result {
        let name = component.name();
        match component.outcome() {
            ComponentOutcome::Verified { .. } => {
                writeln!(out, "Checksum verified for artifact {}", name)
            }
            ComponentOutcome::Mismatch { expected, actual } => writeln!(
                out,
                "Checksum mismatch for artifact {} (expected {}, actual {})",
                name, expected, actual
            ),
            ComponentOutcome::NoDigestDeclared { actual } => writeln!(
                out,
                "Checksum mismatch for artifact {} (no SHA-1 digest declared, actual {})",
                name, actual
            ),
            ComponentOutcome::Failed(reason) => writeln!(
                out,
                "Could not verify artifact {}: {}",
                name,
                reason.summary()
            ),
        }
    }

    fn write_summary(&self, out: &mut String, summary: &VerificationSummary) -> std::fmt::Result {
        writeln!(out)?;
        writeln!(
            out,
            "SBOM files: {} total, {} processed, {} rejected, {} unvalidated, {} failed, {} cancelled",
            summary.files_total,
            summary.files_processed,
            summary.files_rejected,
            summary.files_unvalidated,
            summary.files_failed,
            summary.files_cancelled
        )?;
        writeln!(
            out,
            "Artifacts: {} total, {} verified, {} mismatched, {} without SHA-1 digest, {} failed",
            summary.components_total(),
            summary.components_verified,
            summary.components_mismatched,
            summary.components_missing_digest,
            summary.components_failed
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &VerificationReport) -> Result<String> {
        let mut out = String::new();

        for file in report.files() {
            self.write_file(&mut out, file)?;
        }
        self.write_summary(&mut out, report.summary())?;

        Ok(out)
    }
}
