use crate::sbom_verification::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportMetadataGenerator service for stamping verification runs
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates metadata with the current timestamp and a unique run id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let run_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            run_id,
        )
    }

    /// Generates metadata with default tool information (sbom-verify)
    ///
    /// This uses the compile-time version from Cargo.toml
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata("sbom-verify", env!("CARGO_PKG_VERSION"))
    }
}
