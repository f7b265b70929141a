use crate::sbom_verification::domain::VerificationReport;
use crate::shared::Result;

/// ReportFormatter port for rendering verification reports
///
/// This port abstracts the rendering of a finished run into the
/// human-readable or machine-readable output formats.
pub trait ReportFormatter {
    /// Formats a verification report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &VerificationReport) -> Result<String>;
}
