/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the seams between the verification
/// core and the file system, the checksum authority and the console.
pub mod outbound;
