/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod authority;
pub mod console;
pub mod filesystem;
pub mod formatters;
