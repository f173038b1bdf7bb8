use crate::shared::error::FilterError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum input file size (100 MB)
///
/// Large monorepo lockfiles stay well below this.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A plugin archive can ship a `yarn.lock` symlink pointing anywhere on the
/// validating host.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| FilterError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(FilterError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Symbolic links are not followed. Pass the real file instead.".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(FilterError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Check that the path points at a lockfile or scan report".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a file as UTF-8 after running [`validate_regular_file`]
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    fs::read_to_string(path).map_err(|e| {
        FilterError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("yarn.lock");
        fs::write(&file_path, "# yarn lockfile v1\n").unwrap();

        assert!(validate_regular_file(&file_path, "yarn.lock").is_ok());
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "lockfile");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_regular_file_missing() {
        let result = validate_regular_file(Path::new("/nonexistent/yarn.lock"), "yarn.lock");
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.lock");
        let link = temp_dir.path().join("yarn.lock");
        fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_regular_file(&link, "yarn.lock").unwrap_err();
        assert!(err.to_string().contains("Security violation"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/yarn.lock");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_read_regular_file_returns_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("results.json");
        fs::write(&file_path, "{}").unwrap();

        assert_eq!(read_regular_file(&file_path, "scan results").unwrap(), "{}");
    }
}
