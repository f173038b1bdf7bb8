use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading raw lockfile contents
///
/// Keeping file access behind this port lets the parsers stay pure
/// text-to-model functions.
pub trait LockfileReader {
    /// Reads the lockfile at `lockfile_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The file fails the safety checks (symlink, size)
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String>;
}
