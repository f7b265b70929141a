/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod verify_request;
mod verify_response;

pub use output_format::OutputFormat;
pub use verify_request::{VerifyRequest, DEFAULT_JOBS};
pub use verify_response::VerifyResponse;
