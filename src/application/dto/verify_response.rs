use crate::sbom_verification::domain::VerificationReport;
use crate::shared::error::ExitCode;

/// VerifyResponse - Internal response DTO from the artifact verification use case
#[derive(Debug, Clone)]
pub struct VerifyResponse {
    pub report: VerificationReport,
}

impl VerifyResponse {
    pub fn new(report: VerificationReport) -> Self {
        Self { report }
    }

    /// Exit code for CI integration
    ///
    /// Interruption wins over failures because an interrupted run is incomplete.
    pub fn exit_code(&self) -> ExitCode {
        let summary = self.report.summary();
        if summary.was_cancelled() {
            ExitCode::Interrupted
        } else if summary.has_failures() {
            ExitCode::VerificationFailed
        } else {
            ExitCode::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_verification::domain::{
        Checksum, ComponentOutcome, ComponentReport, FileReport, FileStatus,
    };
    use crate::sbom_verification::services::ReportMetadataGenerator;
    use std::path::PathBuf;

    fn response(files: Vec<FileReport>) -> VerifyResponse {
        VerifyResponse::new(VerificationReport::new(
            ReportMetadataGenerator::generate_default_metadata(),
            files,
        ))
    }

    fn processed(outcome: ComponentOutcome) -> FileReport {
        FileReport::new(
            PathBuf::from("sbom.json"),
            Some(Checksum::from_bytes(&[1])),
            FileStatus::Processed,
            vec![ComponentReport::new(
                "app.bin".to_string(),
                "1.0".to_string(),
                outcome,
            )],
        )
    }

    #[test]
    fn test_exit_code_success() {
        let resp = response(vec![processed(ComponentOutcome::Verified {
            checksum: Checksum::from_bytes(&[2]),
        })]);
        assert_eq!(resp.exit_code(), ExitCode::Success);
    }

    #[test]
    fn test_exit_code_success_for_empty_run() {
        assert_eq!(response(vec![]).exit_code(), ExitCode::Success);
    }

    #[test]
    fn test_exit_code_verification_failed() {
        let resp = response(vec![processed(ComponentOutcome::NoDigestDeclared {
            actual: Checksum::from_bytes(&[2]),
        })]);
        assert_eq!(resp.exit_code(), ExitCode::VerificationFailed);
    }

    #[test]
    fn test_exit_code_interrupted() {
        let resp = response(vec![
            processed(ComponentOutcome::Mismatch {
                expected: "00".to_string(),
                actual: Checksum::from_bytes(&[2]),
            }),
            FileReport::cancelled(PathBuf::from("late.json")),
        ]);
        assert_eq!(resp.exit_code(), ExitCode::Interrupted);
    }
}
