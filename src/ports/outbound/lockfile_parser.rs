use crate::dependency_attribution::domain::{LockfileKind, PackageDetails};
use crate::shared::Result;

/// LockfileParser port turning one lockfile dialect into the normalized
/// package list
///
/// Implementations share one contract:
/// - Output is sorted by name (then version).
/// - Errors are reserved for content that cannot be decoded at all.
/// - A malformed individual record is skipped, never fatal.
pub trait LockfileParser {
    /// The dialect this parser understands
    fn kind(&self) -> LockfileKind;

    /// Parses the full text of a lockfile
    ///
    /// # Errors
    /// Returns `FilterError::LockfileDecodeError` when the top-level
    /// structure cannot be decoded
    fn parse(&self, content: &str) -> Result<Vec<PackageDetails>>;
}
