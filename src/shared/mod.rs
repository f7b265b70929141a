/// Shared kernel - error types, result alias and cross-cutting helpers
pub mod cancellation;
pub mod error;
pub mod result;
pub mod security;

pub use cancellation::CancellationFlag;
pub use result::Result;
