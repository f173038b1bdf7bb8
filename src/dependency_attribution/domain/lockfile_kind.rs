use std::fmt;
use std::path::Path;

/// Lockfile dialect, selected by base filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockfileKind {
    Yarn,
    Npm,
    Pnpm,
    /// Go module manifests are scanned too, but never filtered
    GoMod,
}

impl LockfileKind {
    /// Detects the dialect from the path's file name
    ///
    /// Returns `None` for anything that is not a recognized lockfile.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        match file_name {
            "yarn.lock" => Some(LockfileKind::Yarn),
            "package-lock.json" | "npm-shrinkwrap.json" => Some(LockfileKind::Npm),
            "pnpm-lock.yaml" => Some(LockfileKind::Pnpm),
            "go.mod" => Some(LockfileKind::GoMod),
            _ => None,
        }
    }

    /// Whether findings scanned from this lockfile can be attributed
    pub fn is_javascript(&self) -> bool {
        !matches!(self, LockfileKind::GoMod)
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            LockfileKind::Yarn => "yarn.lock",
            LockfileKind::Npm => "package-lock.json",
            LockfileKind::Pnpm => "pnpm-lock.yaml",
            LockfileKind::GoMod => "go.mod",
        }
    }
}

impl fmt::Display for LockfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
