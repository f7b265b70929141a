use crate::application::dto::{VerifyRequest, VerifyResponse};
use crate::ports::outbound::{
    ArtifactStore, AuthorityDecision, ChecksumAuthority, ProgressReporter, SbomSource,
};
use crate::sbom_verification::domain::{
    Checksum, Component, ComponentOutcome, ComponentReport, FailureReason, FileReport, FileStatus,
    HashAlgorithm, VerificationReport,
};
use crate::sbom_verification::services::{
    ArtifactMatcher, ChecksumEngine, ReportMetadataGenerator, SbomParser,
};
use crate::shared::error::SbomError;
use crate::shared::{CancellationFlag, Result};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Algorithm used for both SBOM document checksums and artifact checksums
const VERIFICATION_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha1;

/// VerifyArtifactsUseCase - Core use case for artifact verification
///
/// For every SBOM document below the artifact root this use case computes the
/// document checksum, asks the checksum authority whether the document can be
/// trusted, parses it, and compares each component's declared SHA-1 digest
/// with the SHA-1 of the artifact on disk.
///
/// A failure in one SBOM file never stops the others. Files are processed
/// with bounded concurrency while the report keeps discovery order.
///
/// # Type Parameters
/// * `S` - SbomSource implementation
/// * `A` - ArtifactStore implementation
/// * `CA` - ChecksumAuthority implementation
/// * `PR` - ProgressReporter implementation
pub struct VerifyArtifactsUseCase<S, A, CA, PR> {
    sbom_source: Arc<S>,
    artifact_store: Arc<A>,
    checksum_authority: CA,
    progress_reporter: PR,
}

impl<S, A, CA, PR> VerifyArtifactsUseCase<S, A, CA, PR>
where
    S: SbomSource + 'static,
    A: ArtifactStore + 'static,
    CA: ChecksumAuthority,
    PR: ProgressReporter,
{
    /// Creates a new VerifyArtifactsUseCase with injected dependencies
    pub fn new(
        sbom_source: S,
        artifact_store: A,
        checksum_authority: CA,
        progress_reporter: PR,
    ) -> Self {
        Self {
            sbom_source: Arc::new(sbom_source),
            artifact_store: Arc::new(artifact_store),
            checksum_authority,
            progress_reporter,
        }
    }

    /// Executes the artifact verification use case
    ///
    /// # Arguments
    /// * `request` - Verification request containing the artifact root and concurrency
    /// * `cancellation` - Checked between SBOM files and between components
    ///
    /// # Returns
    /// VerifyResponse containing one report per discovered SBOM file
    ///
    /// # Errors
    /// Only discovery errors are returned. Everything that goes wrong for a
    /// single file or component is recorded in the report.
    pub async fn execute(
        &self,
        request: VerifyRequest,
        cancellation: &CancellationFlag,
    ) -> Result<VerifyResponse> {
        // Step 1: Discover SBOM documents
        let sbom_files = self.discover_and_report(&request)?;

        // Step 2: Verify each SBOM file
        let file_reports = self
            .verify_all(&request.root, sbom_files, request.jobs, cancellation)
            .await;

        // Step 3: Build and return response
        let report = VerificationReport::new(
            ReportMetadataGenerator::generate_default_metadata(),
            file_reports,
        );
        self.report_completion(&report);

        Ok(VerifyResponse::new(report))
    }

    /// Discovers SBOM files below the root, reporting progress
    fn discover_and_report(&self, request: &VerifyRequest) -> Result<Vec<PathBuf>> {
        self.progress_reporter.report(&format!(
            "🔍 Searching for SBOM files in: {}",
            request.root.display()
        ));

        let mut sbom_files = self.sbom_source.discover(&request.root)?;
        sbom_files.retain(|path| {
            let excluded = request.excluded.contains(path);
            if excluded {
                tracing::debug!(path = %path.display(), "skipping excluded file");
            }
            !excluded
        });

        if sbom_files.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: No SBOM files (*.json) found");
        } else {
            self.progress_reporter
                .report(&format!("✅ Found {} SBOM file(s)", sbom_files.len()));
        }

        Ok(sbom_files)
    }

    /// Verifies all files with at most `jobs` in flight, preserving input order
    async fn verify_all(
        &self,
        root: &Path,
        sbom_files: Vec<PathBuf>,
        jobs: usize,
        cancellation: &CancellationFlag,
    ) -> Vec<FileReport> {
        let total = sbom_files.len();
        let mut completed = 0;

        stream::iter(sbom_files)
            .map(|path| self.verify_sbom_file(root, path, cancellation))
            .buffered(jobs.max(1))
            .inspect(|file_report| {
                completed += 1;
                self.report_file_result(file_report);
                let name = file_report
                    .path()
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned());
                self.progress_reporter
                    .report_progress(completed, total, name.as_deref());
            })
            .collect()
            .await
    }

    /// Runs the full pipeline for one SBOM file
    ///
    /// The authority is consulted before the document is parsed. A rejected or
    /// unvalidated document never causes an artifact read.
    async fn verify_sbom_file(
        &self,
        root: &Path,
        path: PathBuf,
        cancellation: &CancellationFlag,
    ) -> FileReport {
        if cancellation.is_cancelled() {
            return FileReport::cancelled(path);
        }

        tracing::info!(path = %path.display(), "processing SBOM file");

        let (bytes, sbom_checksum) = match self.read_and_checksum_sbom(&path).await {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::info!(path = %path.display(), error = %e, "failed to read SBOM file");
                return FileReport::new(
                    path,
                    None,
                    FileStatus::Failed(FailureReason::from_error(&e)),
                    Vec::new(),
                );
            }
        };

        match self.checksum_authority.validate(&sbom_checksum).await {
            Ok(AuthorityDecision::Accepted) => {
                tracing::debug!(path = %path.display(), checksum = %sbom_checksum, "SBOM checksum accepted");
            }
            Ok(AuthorityDecision::Rejected) => {
                tracing::info!(path = %path.display(), checksum = %sbom_checksum, "SBOM checksum rejected");
                return FileReport::new(
                    path,
                    Some(sbom_checksum),
                    FileStatus::AuthorityRejected,
                    Vec::new(),
                );
            }
            Err(e) => {
                tracing::info!(path = %path.display(), error = %e, "checksum authority unavailable");
                return FileReport::new(
                    path,
                    Some(sbom_checksum),
                    FileStatus::ValidationUnavailable(Self::unavailable_reason(e)),
                    Vec::new(),
                );
            }
        }

        let document = match SbomParser::parse(&bytes, &path) {
            Ok(document) => document,
            Err(e) => {
                tracing::info!(path = %path.display(), error = %e, "failed to parse SBOM file");
                return FileReport::new(
                    path,
                    Some(sbom_checksum),
                    FileStatus::Failed(FailureReason::new(e.kind(), e.to_string())),
                    Vec::new(),
                );
            }
        };

        let mut components = Vec::with_capacity(document.component_count());
        for component in document.components() {
            if cancellation.is_cancelled() {
                return FileReport::new(
                    path,
                    Some(sbom_checksum),
                    FileStatus::Cancelled,
                    components,
                );
            }

            let outcome = self.verify_component(root, component).await;
            components.push(ComponentReport::new(
                component.name().to_string(),
                component.version().to_string(),
                outcome,
            ));
        }

        FileReport::new(path, Some(sbom_checksum), FileStatus::Processed, components)
    }

    /// Reads an SBOM document and computes its checksum off the async runtime
    async fn read_and_checksum_sbom(&self, path: &Path) -> Result<(Vec<u8>, Checksum)> {
        let source = Arc::clone(&self.sbom_source);
        let path = path.to_path_buf();

        tokio::task::spawn_blocking(move || -> Result<(Vec<u8>, Checksum)> {
            let bytes = source.read_sbom(&path)?;
            let checksum = ChecksumEngine::compute(&bytes, VERIFICATION_ALGORITHM.as_str())?;
            Ok((bytes, checksum))
        })
        .await
        .map_err(|e| anyhow::anyhow!("SBOM checksum task failed: {}", e))?
    }

    /// Streams the artifact of one component through SHA-1 and compares it with the declared digest
    async fn verify_component(&self, root: &Path, component: &Component) -> ComponentOutcome {
        let store = Arc::clone(&self.artifact_store);
        let root = root.to_path_buf();
        let name = component.name().to_string();

        let actual = tokio::task::spawn_blocking(move || -> Result<Checksum> {
            let reader = store.open_artifact(&root, &name)?;
            ChecksumEngine::compute_reader(reader, VERIFICATION_ALGORITHM).map_err(|e| {
                SbomError::UnreadableFile {
                    path: root.join(&name),
                    details: e.to_string(),
                }
                .into()
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("Artifact checksum task failed: {}", e))
        .and_then(|result| result);

        match actual {
            Ok(actual) => {
                let outcome = ArtifactMatcher::evaluate(component, VERIFICATION_ALGORITHM, actual);
                tracing::debug!(artifact = component.name(), verified = outcome.is_verified(), "artifact checked");
                outcome
            }
            Err(e) => {
                tracing::info!(artifact = component.name(), error = %e, "failed to check artifact");
                ComponentOutcome::Failed(FailureReason::from_error(&e))
            }
        }
    }

    /// Maps any authority error onto `ValidationUnavailable`
    fn unavailable_reason(error: anyhow::Error) -> FailureReason {
        let error = match error.downcast::<SbomError>() {
            Ok(sbom_error @ SbomError::ValidationUnavailable { .. }) => sbom_error,
            Ok(other) => SbomError::ValidationUnavailable {
                details: other.to_string(),
            },
            Err(other) => SbomError::ValidationUnavailable {
                details: format!("{:#}", other),
            },
        };
        FailureReason::new(error.kind(), error.to_string())
    }

    /// Surfaces per-file problems as warnings while the run continues
    fn report_file_result(&self, file_report: &FileReport) {
        let path = file_report.path().display();
        match file_report.status() {
            FileStatus::AuthorityRejected => self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Checksum validation failed for {}",
                path
            )),
            FileStatus::ValidationUnavailable(reason) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Checksum validation unavailable for {}: {}",
                    path,
                    reason.summary()
                ))
            }
            FileStatus::Failed(reason) => self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipping {}: {}",
                path,
                reason.summary()
            )),
            FileStatus::Processed | FileStatus::Cancelled => {}
        }
    }

    fn report_completion(&self, report: &VerificationReport) {
        let summary = report.summary();
        if summary.was_cancelled() {
            self.progress_reporter.report_completion(&format!(
                "⏹️  Verification interrupted: {} of {} SBOM file(s) cancelled",
                summary.files_cancelled, summary.files_total
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ Verified {} of {} artifact(s) in {} SBOM file(s)",
                summary.components_verified,
                summary.components_total(),
                summary.files_total
            ));
        }
    }
}
