use crate::dependency_attribution::domain::{LockfileKind, ScanResults};
use std::collections::BTreeMap;
use std::fmt;

/// Why a report was returned without running attribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bypass {
    /// A recognized manifest that is not a JavaScript lockfile (go.mod)
    NotJavaScript(LockfileKind),
    /// The lockfile name is not one this engine knows
    UnsupportedLockfile,
    /// Reading or parsing the lockfile failed
    LockfileError(String),
    /// The report contained no package entries
    NoFindings,
}

impl Bypass {
    /// Whether the bypass hid an internal failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Bypass::UnsupportedLockfile | Bypass::LockfileError(_))
    }
}

impl fmt::Display for Bypass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bypass::NotJavaScript(kind) => write!(f, "{} is not filtered", kind),
            Bypass::UnsupportedLockfile => write!(f, "unsupported lockfile"),
            Bypass::LockfileError(details) => write!(f, "lockfile unusable: {}", details),
            Bypass::NoFindings => write!(f, "no findings to filter"),
        }
    }
}

/// Per-entry accounting of one filter run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub kept: usize,
    pub suppressed: usize,
    /// Entries dropped per trusted root
    pub attributed: BTreeMap<String, usize>,
}

impl FilterSummary {
    pub fn attributed_total(&self) -> usize {
        self.attributed.values().sum()
    }

    pub fn dropped(&self) -> usize {
        self.suppressed + self.attributed_total()
    }
}

/// FilterResponse - Result of the vulnerability filter use case
///
/// `results` is always populated. When `bypass` is set it is the request's
/// report, untouched.
#[derive(Debug, Clone)]
pub struct FilterResponse {
    pub results: ScanResults,
    pub summary: FilterSummary,
    pub bypass: Option<Bypass>,
}

impl FilterResponse {
    pub fn filtered(results: ScanResults, summary: FilterSummary) -> Self {
        Self {
            results,
            summary,
            bypass: None,
        }
    }

    /// Returns the report unchanged; every entry counts as kept
    pub fn bypassed(results: ScanResults, bypass: Bypass) -> Self {
        let summary = FilterSummary {
            kept: results.package_count(),
            ..FilterSummary::default()
        };
        Self {
            results,
            summary,
            bypass: Some(bypass),
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.bypass.is_none()
    }

    pub fn has_findings(&self) -> bool {
        self.results.package_count() > 0
    }
}
