use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no findings remain, or `--fail-on-findings` was not given
    Success = 0,
    /// Findings remain after filtering and `--fail-on-findings` was given
    FindingsRemain = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable scan report, write failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FindingsRemain => write!(f, "Findings Remain (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for lockfile parsing and vulnerability filtering.
///
/// Malformed individual lockfile records are never represented here; parsers
/// skip them and keep going.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Lockfile not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read lockfile: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    LockfileReadError { path: PathBuf, details: String },

    #[error("Failed to decode {kind}: {details}\n\n💡 Hint: Please verify that the lockfile was generated by the package manager and not edited by hand")]
    LockfileDecodeError { kind: String, details: String },

    #[error("Unsupported lockfile: {path}\n\n💡 Hint: Supported lockfiles are yarn.lock, package-lock.json, npm-shrinkwrap.json, pnpm-lock.yaml and go.mod")]
    UnsupportedLockfile { path: PathBuf },

    #[error("Package not found in lockfile: {name}")]
    PackageNotFound { name: String },

    #[error("Failed to parse scan results: {path}\nDetails: {details}\n\n💡 Hint: Please pass the JSON output of osv-scanner (--json)")]
    ScanResultsParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
