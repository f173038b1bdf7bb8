use crate::dependency_attribution::domain::ScanResults;
use crate::shared::Result;
use std::path::Path;

/// ScanResultsReader port for loading a vulnerability scanner report
pub trait ScanResultsReader {
    /// Reads and decodes the JSON report at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a scanner report
    fn read_scan_results(&self, path: &Path) -> Result<ScanResults>;
}
