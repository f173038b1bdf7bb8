use crate::dependency_attribution::domain::ScanResults;
use std::path::PathBuf;

/// FilterRequest - Internal request DTO for the vulnerability filter use case
#[derive(Debug, Clone)]
pub struct FilterRequest {
    /// Raw scanner report, moved in and returned (possibly filtered)
    pub results: ScanResults,
    /// Lockfile the report was produced from; its file name selects the parser
    pub lockfile_path: PathBuf,
}

impl FilterRequest {
    pub fn new(results: ScanResults, lockfile_path: PathBuf) -> Self {
        Self {
            results,
            lockfile_path,
        }
    }
}
