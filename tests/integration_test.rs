/// Integration tests for the application layer
///
/// These tests run the verification use case against real SBOM and artifact
/// files in a temporary directory, with mock authority and progress ports.
mod test_utilities;

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_utilities::mocks::*;
use sbom_verify::prelude::*;

fn sha1_hex(bytes: &[u8]) -> String {
    ChecksumEngine::compute(bytes, "SHA-1").unwrap().to_string()
}

/// Writes an SBOM with the given components and returns its bytes
fn write_sbom(root: &Path, relative: &str, components: serde_json::Value) -> Vec<u8> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let bytes = serde_json::to_vec_pretty(&json!({
        "bomFormat": "CycloneDX",
        "specVersion": "1.4",
        "components": components,
    }))
    .unwrap();
    fs::write(&path, &bytes).unwrap();
    bytes
}

fn write_artifact(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn sha1_component(name: &str, content: &[u8]) -> serde_json::Value {
    json!({
        "name": name,
        "version": "1.0.0",
        "hashes": [{ "alg": "SHA-1", "content": sha1_hex(content) }]
    })
}

async fn verify<CA: ChecksumAuthority>(
    root: &Path,
    store: MockArtifactStore,
    authority: CA,
    reporter: MockProgressReporter,
) -> VerifyResponse {
    let use_case = VerifyArtifactsUseCase::new(FileSystemReader::new(), store, authority, reporter);
    use_case
        .execute(
            VerifyRequest::new(root.to_path_buf(), 2),
            &CancellationFlag::new(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_verify_happy_path_with_nested_artifacts() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), "app.bin", b"application binary");
    write_artifact(dir.path(), "lib/libcore.so", b"shared library");
    write_sbom(
        dir.path(),
        "sbom.json",
        json!([
            sha1_component("app.bin", b"application binary"),
            sha1_component("lib/libcore.so", b"shared library"),
        ]),
    );

    let reporter = MockProgressReporter::new();
    let response = verify(
        dir.path(),
        MockArtifactStore::new(),
        MockChecksumAuthority::new(),
        reporter.clone(),
    )
    .await;

    let summary = response.report.summary();
    assert_eq!(summary.files_total, 1);
    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.components_verified, 2);
    assert_eq!(response.exit_code(), ExitCode::Success);

    assert!(reporter
        .messages()
        .iter()
        .any(|m| m.contains("Found 1 SBOM file(s)")));
    assert!(reporter.warnings().is_empty());
    assert!(reporter.completion().is_some());
}

#[tokio::test]
async fn test_progress_steps_follow_discovery_order() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), "app.bin", b"app");
    for name in ["c.json", "a.json", "nested/b.json"] {
        write_sbom(dir.path(), name, json!([sha1_component("app.bin", b"app")]));
    }
    fs::write(dir.path().join("broken.json"), "not json").unwrap();

    let reporter = MockProgressReporter::new();
    verify(
        dir.path(),
        MockArtifactStore::new(),
        MockChecksumAuthority::new(),
        reporter.clone(),
    )
    .await;

    assert_eq!(
        reporter.steps(),
        vec![
            (1, 4, Some("a.json".to_string())),
            (2, 4, Some("broken.json".to_string())),
            (3, 4, Some("c.json".to_string())),
            (4, 4, Some("b.json".to_string())),
        ]
    );
    let warnings = reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("broken.json"));
}

#[tokio::test]
async fn test_discovery_is_recursive_and_ignores_other_files() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), "app.bin", b"app");
    write_artifact(dir.path(), "README.md", b"# not an sbom");
    write_artifact(dir.path(), "sbom.json.bak", b"{}");
    write_sbom(dir.path(), "a.json", json!([sha1_component("app.bin", b"app")]));
    write_sbom(
        dir.path(),
        "nested/deeper/b.json",
        json!([sha1_component("app.bin", b"app")]),
    );

    let response = verify(
        dir.path(),
        MockArtifactStore::new(),
        MockChecksumAuthority::new(),
        MockProgressReporter::new(),
    )
    .await;

    let paths: Vec<PathBuf> = response
        .report
        .files()
        .iter()
        .map(|f| f.path().strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        paths,
        vec![PathBuf::from("a.json"), PathBuf::from("nested/deeper/b.json")]
    );
    assert_eq!(response.report.summary().components_verified, 2);
}

#[tokio::test]
async fn test_modified_artifact_is_reported_as_mismatch() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), "app.bin", b"release build");
    write_sbom(
        dir.path(),
        "sbom.json",
        json!([sha1_component("app.bin", b"release build")]),
    );
    // Flip one byte after the SBOM was written
    write_artifact(dir.path(), "app.bin", b"release buile");

    let response = verify(
        dir.path(),
        MockArtifactStore::new(),
        MockChecksumAuthority::new(),
        MockProgressReporter::new(),
    )
    .await;

    match response.report.files()[0].components()[0].outcome() {
        ComponentOutcome::Mismatch { expected, actual } => {
            assert_eq!(expected, &sha1_hex(b"release build"));
            assert_eq!(actual.as_str(), sha1_hex(b"release buile"));
        }
        other => panic!("expected mismatch, got {:?}", other),
    }
    assert_eq!(response.exit_code(), ExitCode::VerificationFailed);
}

#[tokio::test]
async fn test_rejected_sbom_is_never_parsed_for_artifacts() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), "a.bin", b"a");
    write_artifact(dir.path(), "b.bin", b"b");
    let rejected = write_sbom(dir.path(), "1-rejected.json", json!([sha1_component("a.bin", b"a")]));
    write_sbom(dir.path(), "2-accepted.json", json!([sha1_component("b.bin", b"b")]));

    let store = MockArtifactStore::new();
    let authority = MockChecksumAuthority::new().rejecting(&sha1_hex(&rejected));
    let response = verify(dir.path(), store.clone(), authority.clone(), MockProgressReporter::new()).await;

    let files = response.report.files();
    assert_eq!(files[0].status(), &FileStatus::AuthorityRejected);
    assert_eq!(files[1].status(), &FileStatus::Processed);
    assert_eq!(store.read_names(), vec!["b.bin".to_string()]);
    assert_eq!(authority.calls().len(), 2);
    assert_eq!(authority.calls()[0], sha1_hex(&rejected));
}

#[tokio::test]
async fn test_unavailable_authority_skips_every_file() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), "app.bin", b"app");
    write_sbom(dir.path(), "sbom.json", json!([sha1_component("app.bin", b"app")]));

    let store = MockArtifactStore::new();
    let response = verify(
        dir.path(),
        store.clone(),
        MockChecksumAuthority::unavailable(),
        MockProgressReporter::new(),
    )
    .await;

    assert!(matches!(
        response.report.files()[0].status(),
        FileStatus::ValidationUnavailable(_)
    ));
    assert!(store.read_names().is_empty());
    assert_eq!(response.report.summary().files_unvalidated, 1);
    assert_eq!(response.exit_code(), ExitCode::VerificationFailed);
}

#[tokio::test]
async fn test_component_names_cannot_escape_root() {
    let outer = TempDir::new().unwrap();
    let root = outer.path().join("root");
    fs::create_dir(&root).unwrap();
    fs::write(outer.path().join("secret.bin"), b"secret").unwrap();
    write_sbom(
        &root,
        "sbom.json",
        json!([
            sha1_component("../secret.bin", b"secret"),
            sha1_component("/etc/hostname", b"host"),
            sha1_component("", b""),
        ]),
    );

    let response = verify(
        &root,
        MockArtifactStore::new(),
        MockChecksumAuthority::new(),
        MockProgressReporter::new(),
    )
    .await;

    let components = response.report.files()[0].components();
    assert_eq!(components.len(), 3);
    for component in components {
        match component.outcome() {
            ComponentOutcome::Failed(reason) => assert_eq!(reason.kind(), "PathOutsideRoot"),
            other => panic!("expected PathOutsideRoot for {:?}, got {:?}", component.name(), other),
        }
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_symlinked_artifact_is_refused() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), "real.bin", b"payload");
    std::os::unix::fs::symlink(dir.path().join("real.bin"), dir.path().join("link.bin")).unwrap();
    write_sbom(dir.path(), "sbom.json", json!([sha1_component("link.bin", b"payload")]));

    let response = verify(
        dir.path(),
        MockArtifactStore::new(),
        MockChecksumAuthority::new(),
        MockProgressReporter::new(),
    )
    .await;

    match response.report.files()[0].components()[0].outcome() {
        ComponentOutcome::Failed(reason) => {
            assert_eq!(reason.kind(), "UnreadableFile");
            assert!(reason.message().contains("symbolic link"));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_artifact_behind_symlinked_directory_is_refused() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("root");
    write_artifact(dir.path(), "outside/secret.bin", b"secret");
    fs::create_dir(&root).unwrap();
    std::os::unix::fs::symlink("../outside", root.join("link")).unwrap();
    write_sbom(&root, "sbom.json", json!([sha1_component("link/secret.bin", b"secret")]));

    let store = MockArtifactStore::new();
    let response = verify(
        &root,
        store.clone(),
        MockChecksumAuthority::new(),
        MockProgressReporter::new(),
    )
    .await;

    assert_eq!(store.read_names(), vec!["link/secret.bin".to_string()]);
    match response.report.files()[0].components()[0].outcome() {
        ComponentOutcome::Failed(reason) => {
            assert_eq!(reason.kind(), "PathOutsideRoot");
            assert!(reason.message().contains("symbolic link"));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(response.exit_code(), ExitCode::VerificationFailed);
}

#[tokio::test]
async fn test_artifact_larger_than_one_gib_is_verified() {
    let dir = TempDir::new().unwrap();
    let image = fs::File::create(dir.path().join("disk.img")).unwrap();
    image.set_len(1024 * 1024 * 1024 + 1).unwrap();
    write_sbom(
        dir.path(),
        "sbom.json",
        json!([{
            "name": "disk.img",
            "version": "1.0.0",
            "hashes": [{ "alg": "SHA-1", "content": "6eda9723f78b8846ca0a86118b28d6540b8f95a5" }]
        }]),
    );

    let response = verify(
        dir.path(),
        MockArtifactStore::new(),
        MockChecksumAuthority::new(),
        MockProgressReporter::new(),
    )
    .await;

    assert!(response.report.files()[0].components()[0].outcome().is_verified());
    assert_eq!(response.exit_code(), ExitCode::Success);
}

#[tokio::test]
async fn test_component_with_only_other_algorithms_has_no_digest() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), "app.bin", b"app");
    write_sbom(
        dir.path(),
        "sbom.json",
        json!([{
            "name": "app.bin",
            "version": "2.0",
            "hashes": [
                { "alg": "SHA-256", "content": "00" },
                { "alg": "sha-1", "content": sha1_hex(b"app") }
            ]
        }]),
    );

    let response = verify(
        dir.path(),
        MockArtifactStore::new(),
        MockChecksumAuthority::new(),
        MockProgressReporter::new(),
    )
    .await;

    assert!(matches!(
        response.report.files()[0].components()[0].outcome(),
        ComponentOutcome::NoDigestDeclared { .. }
    ));
    assert_eq!(response.report.summary().components_missing_digest, 1);
}

#[tokio::test]
async fn test_caching_authority_asks_once_per_identical_document() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), "app.bin", b"app");
    write_sbom(dir.path(), "a.json", json!([sha1_component("app.bin", b"app")]));
    write_sbom(dir.path(), "b.json", json!([sha1_component("app.bin", b"app")]));

    let authority = MockChecksumAuthority::new();
    let use_case = VerifyArtifactsUseCase::new(
        FileSystemReader::new(),
        MockArtifactStore::new(),
        CachingChecksumAuthority::new(authority.clone()),
        MockProgressReporter::new(),
    );
    let response = use_case
        .execute(
            VerifyRequest::new(dir.path().to_path_buf(), 1),
            &CancellationFlag::new(),
        )
        .await
        .unwrap();

    assert_eq!(response.report.summary().files_processed, 2);
    assert_eq!(authority.calls().len(), 1);
}

#[tokio::test]
async fn test_json_report_for_mixed_results() {
    let dir = TempDir::new().unwrap();
    write_artifact(dir.path(), "app.bin", b"app");
    write_sbom(
        dir.path(),
        "sbom.json",
        json!([
            sha1_component("app.bin", b"app"),
            sha1_component("missing.bin", b"gone"),
        ]),
    );
    fs::write(dir.path().join("broken.json"), "{ \"components\": [").unwrap();

    let response = verify(
        dir.path(),
        MockArtifactStore::new(),
        MockChecksumAuthority::new(),
        MockProgressReporter::new(),
    )
    .await;

    let output = FormatterFactory::create(OutputFormat::Json)
        .format(&response.report)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["success"], false);
    assert_eq!(value["summary"]["filesTotal"], 2);
    assert_eq!(value["files"][0]["status"], "failed");
    assert_eq!(value["files"][0]["error"]["kind"], "MalformedDocument");
    assert_eq!(value["files"][1]["components"][0]["status"], "verified");
    assert_eq!(value["files"][1]["components"][1]["status"], "failed");
    assert_eq!(
        value["files"][1]["components"][1]["error"]["kind"],
        "UnreadableFile"
    );
}

#[tokio::test]
async fn test_empty_root_is_success() {
    let dir = TempDir::new().unwrap();
    let reporter = MockProgressReporter::new();

    let response = verify(
        dir.path(),
        MockArtifactStore::new(),
        MockChecksumAuthority::new(),
        reporter.clone(),
    )
    .await;

    assert!(response.report.files().is_empty());
    assert_eq!(response.exit_code(), ExitCode::Success);
    assert!(reporter.steps().is_empty());
    assert!(reporter
        .warnings()
        .iter()
        .any(|m| m.contains("No SBOM files")));
}
