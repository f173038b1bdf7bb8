use crate::dependency_attribution::domain::ScanResults;
use crate::ports::outbound::{LockfileReader, ScanResultsReader};
use crate::shared::error::FilterError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::io::{self, Read};
use std::path::Path;

/// Path that selects stdin instead of a file for the scan report
pub const STDIN_PATH: &str = "-";

/// FileSystemReader adapter for reading lockfiles and scan reports
///
/// This adapter implements both LockfileReader and ScanResultsReader ports.
/// Every file goes through the same safety checks before it is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_stdin(&self) -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| FilterError::FileReadError {
                path: STDIN_PATH.into(),
                details: e.to_string(),
            })?;
        Ok(content)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String> {
        if !lockfile_path.exists() && lockfile_path.symlink_metadata().is_err() {
            return Err(FilterError::LockfileNotFound {
                path: lockfile_path.to_path_buf(),
                suggestion: format!(
                    "No lockfile at \"{}\".\n   \
                     Pass the yarn.lock, package-lock.json or pnpm-lock.yaml shipped with the plugin source.",
                    lockfile_path.display()
                ),
            }
            .into());
        }

        read_regular_file(lockfile_path, "lockfile").map_err(|e| {
            FilterError::LockfileReadError {
                path: lockfile_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ScanResultsReader for FileSystemReader {
    fn read_scan_results(&self, path: &Path) -> Result<ScanResults> {
        let content = if path == Path::new(STDIN_PATH) {
            self.read_stdin()?
        } else {
            read_regular_file(path, "scan report")?
        };

        ScanResults::from_json(&content).map_err(|e| {
            FilterError::ScanResultsParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
