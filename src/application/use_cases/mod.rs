/// Use cases module containing application business logic orchestration
mod verify_artifacts;

pub use verify_artifacts::VerifyArtifactsUseCase;
