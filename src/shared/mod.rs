/// Shared kernel - Common types and utilities
///
/// Error taxonomy, the crate-wide `Result` alias, file safety checks and the
/// process-wide regex cache used by the lockfile parsers.
pub mod error;
pub mod regex_cache;
pub mod result;
pub mod security;

pub use result::Result;
