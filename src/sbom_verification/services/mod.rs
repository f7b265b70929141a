mod artifact_matcher;
mod checksum_engine;
mod report_metadata_generator;
mod sbom_parser;

pub use artifact_matcher::ArtifactMatcher;
pub use checksum_engine::ChecksumEngine;
pub use report_metadata_generator::ReportMetadataGenerator;
pub use sbom_parser::SbomParser;
