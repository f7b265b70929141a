/// Checksum authority adapters
mod accept_all;
mod caching_authority;

pub use accept_all::AcceptAllAuthority;
pub use caching_authority::CachingChecksumAuthority;
