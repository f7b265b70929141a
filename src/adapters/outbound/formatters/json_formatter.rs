use crate::ports::outbound::ReportFormatter;
use crate::sbom_verification::domain::{
    ComponentOutcome, ComponentReport, FailureReason, FileReport, FileStatus, ReportMetadata,
    VerificationReport, VerificationSummary,
};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport {
    run_id: String,
    timestamp: String,
    tool: Tool,
    success: bool,
    summary: Summary,
    files: Vec<File>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    files_total: usize,
    files_processed: usize,
    files_rejected: usize,
    files_unvalidated: usize,
    files_failed: usize,
    files_cancelled: usize,
    components_total: usize,
    components_verified: usize,
    components_mismatched: usize,
    components_missing_digest: usize,
    components_failed: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct File {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sbom_checksum: Option<String>,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Error>,
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Component {
    name: String,
    version: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Error>,
}

#[derive(Debug, Serialize)]
struct Error {
    kind: String,
    message: String,
}

/// JsonFormatter adapter for machine-readable verification reports
///
/// Produces a pretty-printed JSON document with per-file and per-component
/// results plus aggregate counts, so CI jobs don't have to parse text.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_summary(&self, summary: &VerificationSummary) -> Summary {
        Summary {
            files_total: summary.files_total,
            files_processed: summary.files_processed,
            files_rejected: summary.files_rejected,
            files_unvalidated: summary.files_unvalidated,
            files_failed: summary.files_failed,
            files_cancelled: summary.files_cancelled,
            components_total: summary.components_total(),
            components_verified: summary.components_verified,
            components_mismatched: summary.components_mismatched,
            components_missing_digest: summary.components_missing_digest,
            components_failed: summary.components_failed,
        }
    }

    fn build_tool(&self, metadata: &ReportMetadata) -> Tool {
        Tool {
            name: metadata.tool_name().to_string(),
            version: metadata.tool_version().to_string(),
        }
    }

    fn build_file(&self, file: &FileReport) -> File {
        let (status, error) = match file.status() {
            FileStatus::Processed => ("processed", None),
            FileStatus::AuthorityRejected => ("authorityRejected", None),
            FileStatus::ValidationUnavailable(reason) => {
                ("validationUnavailable", Some(self.build_error(reason)))
            }
            FileStatus::Failed(reason) => ("failed", Some(self.build_error(reason))),
            FileStatus::Cancelled => ("cancelled", None),
        };

        File {
            path: file.path().display().to_string(),
            sbom_checksum: file.sbom_checksum().map(|c| c.to_string()),
            status,
            error,
            components: file
                .components()
                .iter()
                .map(|c| self.build_component(c))
                .collect(),
        }
    }

    fn build_component(&self, component: &ComponentReport) -> Component {
        let (status, expected, actual, error) = match component.outcome() {
            ComponentOutcome::Verified { checksum } => {
                ("verified", None, Some(checksum.to_string()), None)
            }
            ComponentOutcome::Mismatch { expected, actual } => (
                "mismatch",
                Some(expected.clone()),
                Some(actual.to_string()),
                None,
            ),
            ComponentOutcome::NoDigestDeclared { actual } => {
                ("noDigestDeclared", None, Some(actual.to_string()), None)
            }
            ComponentOutcome::Failed(reason) => ("failed", None, None, Some(self.build_error(reason))),
        };

        Component {
            name: component.name().to_string(),
            version: component.version().to_string(),
            status,
            expected,
            actual,
            error,
        }
    }

    fn build_error(&self, reason: &FailureReason) -> Error {
        Error {
            kind: reason.kind().to_string(),
            message: reason.summary().to_string(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &VerificationReport) -> Result<String> {
        let summary = report.summary();
        let json_report = JsonReport {
            run_id: report.metadata().run_id().to_string(),
            timestamp: report.metadata().timestamp().to_string(),
            tool: self.build_tool(report.metadata()),
            success: !summary.has_failures() && !summary.was_cancelled(),
            summary: self.build_summary(summary),
            files: report.files().iter().map(|f| self.build_file(f)).collect(),
        };

        serde_json::to_string_pretty(&json_report).map_err(Into::into)
    }
}
