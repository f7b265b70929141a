/// Verification domain - SBOM documents, checksums and verification outcomes
///
/// Everything in this layer is pure: no file system, network or console access.
pub mod domain;
pub mod services;
